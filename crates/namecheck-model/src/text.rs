use serde::{Deserialize, Serialize};

/// One piece of extracted document text and where it came from.
///
/// The location label is opaque to the engine: spreadsheet coordinates,
/// page/line numbers and CSV row/column labels are all valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPair {
    pub location: String,
    pub text: String,
}

impl TextPair {
    pub fn new(location: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            text: text.into(),
        }
    }
}
