//! Master-list sanitisation and loading.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::decode::read_text;
use crate::defaults::DEFAULT_MASTER_NAMES;
use crate::error::{IngestError, Result};

/// A list file with fewer names than this is treated as broken.
pub const MIN_MASTER_NAMES: usize = 10;

/// Where the active master list came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MasterSource {
    File(PathBuf),
    Embedded,
}

impl MasterSource {
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Embedded => "embedded".to_string(),
        }
    }
}

/// Result of resolving the master list.
///
/// `warning` explains why a requested file was not used.
#[derive(Debug, Clone)]
pub struct MasterLoad {
    pub names: Vec<String>,
    pub source: MasterSource,
    pub warning: Option<String>,
}

/// Trims names, drops byte-order marks, blanks and repeats. First
/// occurrence wins.
pub fn sanitize_master_names<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for item in raw {
        let name = item.as_ref().trim().trim_start_matches('\u{feff}').trim();
        if name.is_empty() || !seen.insert(name.to_string()) {
            continue;
        }
        names.push(name.to_string());
    }
    names
}

/// The embedded list, sanitised.
pub fn default_master_names() -> Vec<String> {
    sanitize_master_names(DEFAULT_MASTER_NAMES)
}

/// Reads a master list file.
///
/// `.csv` files contribute their first column; anything else is read one
/// name per line.
pub fn read_master_file(path: &Path) -> Result<Vec<String>> {
    let text = read_text(path)?;
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let raw: Vec<String> = if is_csv {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());
        let mut first_column = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| IngestError::CsvParse {
                path: path.to_path_buf(),
                source,
            })?;
            if let Some(value) = record.get(0) {
                first_column.push(value.to_string());
            }
        }
        first_column
    } else {
        text.lines().map(str::to_string).collect()
    };

    let names = sanitize_master_names(raw);
    if names.len() < MIN_MASTER_NAMES {
        return Err(IngestError::TooFewNames {
            path: path.to_path_buf(),
            found: names.len(),
            required: MIN_MASTER_NAMES,
        });
    }
    debug!(path = %path.display(), names = names.len(), "read master list");
    Ok(names)
}

/// Resolves the master list: the given file when it is usable, the
/// embedded list otherwise.
pub fn load_master_names(path: Option<&Path>) -> MasterLoad {
    let Some(path) = path else {
        return MasterLoad {
            names: default_master_names(),
            source: MasterSource::Embedded,
            warning: None,
        };
    };
    match read_master_file(path) {
        Ok(names) => MasterLoad {
            names,
            source: MasterSource::File(path.to_path_buf()),
            warning: None,
        },
        Err(err) => {
            warn!(path = %path.display(), error = %err, "falling back to embedded master list");
            MasterLoad {
                names: default_master_names(),
                source: MasterSource::Embedded,
                warning: Some(err.to_string()),
            }
        }
    }
}
