//! Error types for batch processing.

use std::path::PathBuf;

use hotel_ingest::IngestError;
use hotel_output::OutputError;
use hotel_storage::StorageError;
use hotel_transform::TransformError;
use hotel_validate::ValidateError;
use thiserror::Error;

/// Errors that abort a batch. No partial output is written when one is
/// returned.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No batches, or batches without any rows.
    #[error("no rows to process: received {batches} batch(es) with zero total rows")]
    EmptyInput { batches: usize },

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Validate(#[from] ValidateError),

    #[error(transparent)]
    Serialization(#[from] OutputError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The notification payload has no usable record.
    #[error("invalid storage event: {message}")]
    InvalidEvent { message: String },

    /// Settings file could not be loaded.
    #[error("invalid settings file {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for CoreError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
