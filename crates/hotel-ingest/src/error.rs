//! Error types for raw listing ingestion.

use thiserror::Error;

/// Errors that can occur while turning staged objects into raw batches.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Encoding Errors ===
    /// The buffer starts with a byte order mark we do not read.
    #[error("unsupported encoding {encoding} in {key}")]
    UnsupportedEncoding { key: String, encoding: &'static str },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {key}: {message}")]
    CsvParse { key: String, message: String },

    /// CSV buffer is empty (no header row).
    #[error("CSV object is empty: {key}")]
    EmptyCsv { key: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
