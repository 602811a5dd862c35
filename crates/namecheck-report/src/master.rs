//! Master-list export.

use std::io::Write;

use namecheck_match::normalize::strip_prefix;
use serde::Serialize;

use crate::error::Result;

pub const MASTER_HEADERS: [&str; 4] = ["No.", "공식 명칭", "접두어", "순수 명칭"];

/// A canonical name split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasterRow {
    pub number: usize,
    pub name: String,
    /// Prefix text without parentheses, empty when absent.
    pub prefix: String,
    pub bare: String,
}

impl MasterRow {
    pub fn new(number: usize, name: &str) -> Self {
        Self {
            number,
            name: name.to_string(),
            prefix: prefix_label(name).to_string(),
            bare: strip_prefix(name).to_string(),
        }
    }
}

fn prefix_label(name: &str) -> &str {
    name.strip_prefix('(')
        .and_then(|rest| rest.find(')').map(|close| &rest[..close]))
        .unwrap_or_default()
}

/// Numbered rows, starting at 1.
pub fn master_rows<S: AsRef<str>>(names: &[S]) -> Vec<MasterRow> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| MasterRow::new(idx + 1, name.as_ref()))
        .collect()
}

pub fn write_master_csv<W: Write, S: AsRef<str>>(writer: W, names: &[S]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(MASTER_HEADERS)?;
    for row in master_rows(names) {
        let number = row.number.to_string();
        csv.write_record([
            number.as_str(),
            row.name.as_str(),
            row.prefix.as_str(),
            row.bare.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
