//! Error types for payload encoding.

use thiserror::Error;

/// Errors raised while encoding or decoding a payload.
#[derive(Debug, Error)]
pub enum OutputError {
    /// A batch could not be written as Parquet.
    #[error("failed to serialize {rows} rows to parquet: {message}")]
    Serialization { rows: usize, message: String },

    /// A payload is not readable Parquet.
    #[error("failed to read parquet payload ({bytes} bytes): {message}")]
    Deserialization { bytes: usize, message: String },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
