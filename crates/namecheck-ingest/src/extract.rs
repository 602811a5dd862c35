//! Text-pair extraction backends.
//!
//! Every backend turns a file into `(location, text)` pairs with blank
//! cells and lines dropped. Location labels are backend specific and
//! opaque to the review engine.

use std::path::Path;

use namecheck_model::TextPair;
use tracing::debug;

use crate::decode::read_text;
use crate::error::{IngestError, Result};

/// Produces located text fragments from a document.
pub trait Extractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<Vec<TextPair>>;
}

/// CSV cells, located as `R{row} C{column}` (both 1-based).
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExtractor;

impl Extractor for CsvExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<TextPair>> {
        let text = read_text(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut pairs = Vec::new();
        for (row_idx, record) in reader.records().enumerate() {
            let record = record.map_err(|source| IngestError::CsvParse {
                path: path.to_path_buf(),
                source,
            })?;
            for (col_idx, value) in record.iter().enumerate() {
                let value = value.trim();
                if value.is_empty() {
                    continue;
                }
                pairs.push(TextPair::new(
                    format!("R{} C{}", row_idx + 1, col_idx + 1),
                    value,
                ));
            }
        }
        Ok(pairs)
    }
}

/// Plain-text lines, located as `L{line}` (1-based, blank lines counted).
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl Extractor for TextExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<TextPair>> {
        let text = read_text(path)?;
        Ok(text
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| {
                let line = line.trim();
                (!line.is_empty()).then(|| TextPair::new(format!("L{}", idx + 1), line))
            })
            .collect())
    }
}

/// Extensions handled by [`FileExtractor`], lowercase and without dots.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "txt"];

/// Lowercased extension including the leading dot, or empty.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

pub fn is_supported(path: &Path) -> bool {
    let ext = extension_of(path);
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|supported| ext.strip_prefix('.') == Some(*supported))
}

/// Dispatches on the file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileExtractor;

impl Extractor for FileExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<TextPair>> {
        let extension = extension_of(path);
        let pairs = match extension.as_str() {
            ".csv" => CsvExtractor.extract(path)?,
            ".txt" => TextExtractor.extract(path)?,
            _ => {
                return Err(IngestError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    extension,
                });
            }
        };
        debug!(path = %path.display(), fragments = pairs.len(), "extracted text");
        Ok(pairs)
    }
}
