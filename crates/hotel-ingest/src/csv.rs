//! CSV buffer reading.
//!
//! Listings are downloaded as raw bytes from object storage and parsed in memory.
//! Every column is read as text: numeric casting and date parsing belong to the
//! transformation stage, where failures are reported per column and row.

use std::io::Cursor;

use polars::prelude::*;

use crate::error::{IngestError, Result};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(key: &str, bytes: &[u8]) -> Result<()> {
    if bytes.len() >= 2 {
        // UTF-16 LE BOM
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                key: key.to_string(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                key: key.to_string(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped before parsing)
    Ok(())
}

/// Reads a downloaded CSV object into a raw batch.
///
/// The first row is the header. All columns are loaded as `String`; empty
/// fields become null. A header-only object yields a zero-row batch.
pub fn read_csv_bytes(key: &str, bytes: &[u8]) -> Result<DataFrame> {
    validate_encoding(key, bytes)?;

    let content = bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes);
    if content.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyCsv {
            key: key.to_string(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(content.to_vec()))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            key: key.to_string(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        key,
        rows = df.height(),
        columns = df.width(),
        "parsed CSV object"
    );

    Ok(df)
}
