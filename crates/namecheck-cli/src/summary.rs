use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use namecheck_model::{CheckResult, FileReviewResult, ReviewStatus};
use namecheck_report::master_rows;

use crate::commands::{MasterListing, ReviewOutcome};

pub fn print_review(outcome: &ReviewOutcome) {
    println!(
        "Master list: {} ({} names)",
        outcome.master.source.label(),
        outcome.master.names.len()
    );
    if let Some(warning) = &outcome.master.warning {
        eprintln!("warning: master list not used: {warning}");
    }
    if let Some(path) = &outcome.report {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Names"),
        header_cell("Match"),
        header_cell("Mismatch"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for result in &outcome.files {
        table.add_row(vec![
            Cell::new(&result.file),
            status_cell(result.status),
            Cell::new(result.total),
            count_cell(result.matched, Color::Green),
            count_cell(result.mismatched, Color::Red),
        ]);
    }
    let summary = &outcome.summary;
    table.add_row(vec![
        Cell::new(format!("TOTAL ({} files)", summary.files))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} to review", summary.needs_review + summary.errors))
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
        count_cell(summary.matched, Color::Green).add_attribute(Attribute::Bold),
        count_cell(summary.mismatched, Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_mismatch_table(&outcome.files);
    println!("Elapsed: {:.2}s", outcome.elapsed.as_secs_f64());
}

fn print_mismatch_table(files: &[FileReviewResult]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Location"),
        header_cell("Written"),
        header_cell("Official"),
        header_cell("Reason"),
    ]);
    apply_detail_table_style(&mut table);
    let mut rows = 0usize;
    for result in files {
        if let Some(error) = &result.error {
            table.add_row(vec![
                Cell::new(&result.file),
                dim_cell("-"),
                status_cell(ReviewStatus::ExtractionError),
                dim_cell("-"),
                Cell::new(error).fg(Color::Red),
            ]);
            rows += 1;
            continue;
        }
        for detail in result.mismatches() {
            table.add_row(vec![
                Cell::new(&result.file),
                Cell::new(detail.location()),
                Cell::new(&detail.input).fg(Color::Yellow),
                Cell::new(detail.suggestion()).fg(Color::Green),
                Cell::new(detail.issue.reason()),
            ]);
            rows += 1;
        }
    }
    if rows == 0 {
        return;
    }
    println!();
    println!("Mismatches:");
    println!("{table}");
}

pub fn print_checks(results: &[(String, Option<CheckResult>)]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Status"),
        header_cell("Official"),
        header_cell("Detail"),
    ]);
    apply_detail_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for (name, result) in results {
        let row = match result {
            Some(result) if result.is_match() => vec![
                Cell::new(name),
                Cell::new(result.status.label()).fg(Color::Green),
                Cell::new(result.suggestion()),
                dim_cell("-"),
            ],
            Some(result) => vec![
                Cell::new(name),
                Cell::new(result.status.label())
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
                Cell::new(result.suggestion()).fg(Color::Green),
                Cell::new(result.issue.to_string()),
            ],
            None => vec![
                Cell::new(name),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("not a known project name"),
            ],
        };
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_master(listing: &MasterListing) {
    if let Some(warning) = &listing.master.warning {
        eprintln!("warning: master list not used: {warning}");
    }
    if let Some(path) = &listing.output {
        println!(
            "Exported {} names from {} to {}",
            listing.master.names.len(),
            listing.master.source.label(),
            path.display()
        );
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("No."),
        header_cell("Official name"),
        header_cell("Prefix"),
        header_cell("Bare name"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in master_rows(&listing.master.names) {
        let prefix = if row.prefix.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(row.prefix)
        };
        table.add_row(vec![
            dim_cell(row.number),
            Cell::new(row.name).fg(Color::Blue),
            prefix,
            Cell::new(row.bare),
        ]);
    }
    println!("Master list: {}", listing.master.source.label());
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ]);
    }
}

fn apply_detail_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: ReviewStatus) -> Cell {
    let cell = Cell::new(status.label());
    match status {
        ReviewStatus::Compliant => cell.fg(Color::Green),
        ReviewStatus::NeedsReview => cell.fg(Color::Yellow).add_attribute(Attribute::Bold),
        ReviewStatus::ExtractionError => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        ReviewStatus::NoNamesFound => cell.fg(Color::DarkGrey),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
