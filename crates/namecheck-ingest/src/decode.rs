//! Byte-to-text decoding for Korean office exports.

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::{EUC_KR, Encoding, UTF_8};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Reads a file as text.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::file_read(path, e))?;
    decode_bytes(&bytes).ok_or_else(|| IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
    })
}

/// Decodes bytes, honouring a byte-order mark, then trying UTF-8 and
/// finally EUC-KR (decoded as its CP949 superset). Returns `None` when
/// nothing decodes without replacement characters.
pub fn decode_bytes(bytes: &[u8]) -> Option<String> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_strict(encoding, &bytes[bom_len..]);
    }
    if let Some(text) = decode_strict(UTF_8, bytes) {
        return Some(text);
    }
    let text = decode_strict(EUC_KR, bytes)?;
    debug!(bytes = bytes.len(), "decoded legacy Korean encoding");
    Some(text)
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("공사명".as_bytes());
        assert_eq!(decode_bytes(&bytes).as_deref(), Some("공사명"));
    }

    #[test]
    fn falls_back_to_euc_kr() {
        let (encoded, _, had_errors) = EUC_KR.encode("오산세교");
        assert!(!had_errors);
        assert_eq!(decode_bytes(&encoded).as_deref(), Some("오산세교"));
    }

    #[test]
    fn rejects_undecodable_bytes() {
        assert_eq!(decode_bytes(&[0xFF, 0xFF, 0xFF]), None);
    }
}
