// ============================================================
// IMPORT FILE READING
// ============================================================
// Read CSV files that are not guaranteed to be valid UTF-8

use std::path::Path;

use tracing::debug;

use crate::domain::error::{ImportError, Result};

/// Read an import file, decoding UTF-8 when possible and falling back
/// to Windows-1252 for legacy spreadsheet exports.
pub fn read_import_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| ImportError::IoError(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(decode_bytes(&bytes))
}

/// Decode raw bytes: UTF-8 first, Windows-1252 as the fallback.
pub fn decode_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, encoding, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            debug!(encoding = encoding.name(), "decoded import file with fallback encoding");
            text.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_passthrough() {
        assert_eq!(decode_bytes("name,unit\ntemp,°C".as_bytes()), "name,unit\ntemp,°C");
    }

    #[test]
    fn test_decode_windows_1252_fallback() {
        // "temp,°C" with 0xB0 for the degree sign, invalid as UTF-8
        let bytes = b"name,unit\ntemp,\xB0C";
        assert_eq!(decode_bytes(bytes), "name,unit\ntemp,°C");
    }
}
