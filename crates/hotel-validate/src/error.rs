//! Error types for classification.

use thiserror::Error;

/// Errors raised while classifying an enriched batch.
///
/// Rule violations are never errors; only a batch that cannot be classified
/// at all is.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// A column the validity predicate reads is absent.
    #[error("predicate column '{column}' not found in enriched batch")]
    MissingColumn { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ValidateError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for classification operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
