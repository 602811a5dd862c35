//! Document discovery.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};
use crate::extract::is_supported;

/// Lists supported documents under `dir`, recursing into subdirectories.
///
/// Returns paths sorted lexicographically.
pub fn discover_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        let entries = std::fs::read_dir(&current).map_err(|e| IngestError::DirectoryRead {
            path: current.clone(),
            source: e,
        })?;

        for entry_result in entries {
            let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
                path: current.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.is_file() && is_supported(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Expands command-line inputs into a list of documents.
///
/// Directories contribute their supported documents; files are kept as
/// given, so unsupported ones surface as extraction errors later.
/// Repeats are dropped, first occurrence wins.
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut documents = Vec::new();
    for input in inputs {
        let expanded = if input.is_dir() {
            discover_documents(input)?
        } else if input.exists() {
            vec![input.clone()]
        } else {
            return Err(IngestError::FileNotFound {
                path: input.clone(),
            });
        };
        for path in expanded {
            if seen.insert(path.clone()) {
                documents.push(path);
            }
        }
    }
    Ok(documents)
}
