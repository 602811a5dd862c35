//! Error types for extraction and master-list loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading documents or master lists.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Input path does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Decoding Errors ===
    /// No supported encoding decodes the file cleanly.
    #[error("unrecognised text encoding in {path}")]
    UnsupportedEncoding { path: PathBuf },

    /// No extractor handles this kind of file.
    #[error("unsupported format: {extension}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Master List Errors ===
    /// The master list is too short to be trusted.
    #[error("master list {path} has {found} names, at least {required} required")]
    TooFewNames {
        path: PathBuf,
        found: usize,
        required: usize,
    },
}

impl IngestError {
    pub(crate) fn file_read(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
