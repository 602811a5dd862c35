//! CSV and JSON renderers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use namecheck_model::{FileReviewResult, ReviewSummary};
use serde::Serialize;
use tracing::info;

use crate::error::{ReportError, Result};
use crate::rows::{REPORT_HEADERS, report_rows};

/// Output format for review reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
}

impl ReportFormat {
    /// Guesses the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Writes the mismatch report as CSV: a header line, then one row per
/// mismatch or failed file.
pub fn write_csv_report<W: Write>(writer: W, results: &[FileReviewResult]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(REPORT_HEADERS)?;
    for row in report_rows(results) {
        csv.write_record(row.fields())?;
    }
    csv.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tool_version: &'static str,
    generated_at: String,
    summary: ReviewSummary,
    files: &'a [FileReviewResult],
}

/// Writes every file result, matches included, as pretty-printed JSON.
pub fn write_json_report<W: Write>(mut writer: W, results: &[FileReviewResult]) -> Result<()> {
    let report = JsonReport {
        tool_version: env!("CARGO_PKG_VERSION"),
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        summary: ReviewSummary::from_results(results),
        files: results,
    };
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Writes a report file. CSV output starts with a UTF-8 byte-order mark so
/// spreadsheet tools pick the right encoding.
pub fn write_report_file(
    path: &Path,
    format: ReportFormat,
    results: &[FileReviewResult],
) -> Result<()> {
    let file = File::create(path).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    match format {
        ReportFormat::Csv => {
            writer.write_all("\u{feff}".as_bytes())?;
            write_csv_report(&mut writer, results)?;
        }
        ReportFormat::Json => write_json_report(&mut writer, results)?,
    }
    writer.flush()?;
    info!(path = %path.display(), ?format, files = results.len(), "wrote report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(ReportFormat::from_path(Path::new("r.CSV")), Some(ReportFormat::Csv));
        assert_eq!(ReportFormat::from_path(Path::new("r.json")), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::from_path(Path::new("r.xlsx")), None);
        assert_eq!(ReportFormat::from_path(Path::new("report")), None);
    }
}
