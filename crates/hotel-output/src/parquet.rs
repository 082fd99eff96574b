//! Parquet payload encoding.
//!
//! Payloads are written in memory with Snappy compression and a fixed writer
//! configuration, so the same batch always encodes to the same bytes.

use std::io::Cursor;

use polars::prelude::*;
use tracing::debug;

use crate::error::{OutputError, Result};

/// Encode a batch as a Parquet file in memory.
///
/// A zero-row batch encodes to a valid file carrying the schema.
pub fn encode_parquet(df: &DataFrame) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    ParquetWriter::new(&mut buf)
        .with_compression(ParquetCompression::Snappy)
        .finish(&mut df.clone())
        .map_err(|err| OutputError::Serialization {
            rows: df.height(),
            message: err.to_string(),
        })?;

    debug!(rows = df.height(), bytes = buf.len(), "Encoded parquet payload");
    Ok(buf)
}

/// Decode a Parquet payload produced by [`encode_parquet`].
pub fn decode_parquet(bytes: &[u8]) -> Result<DataFrame> {
    ParquetReader::new(Cursor::new(bytes.to_vec()))
        .finish()
        .map_err(|err| OutputError::Deserialization {
            bytes: bytes.len(),
            message: err.to_string(),
        })
}
