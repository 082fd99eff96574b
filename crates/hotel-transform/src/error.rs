//! Error types for listing transformation.

use thiserror::Error;

/// Errors that abort the transformation of a batch.
///
/// Every variant is structural: row-level content anomalies (negative prices,
/// out-of-range scores) are not errors and are left to classification.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A column the transformation reads is absent from the batch.
    #[error("required column '{column}' not found in batch")]
    MissingColumn { column: String },

    /// A check-in or check-out value is not a recognizable date.
    #[error("cannot parse '{value}' as a date in column '{column}' (row {row})")]
    DateParse {
        column: String,
        row: usize,
        value: String,
    },

    /// A price value is not numeric.
    #[error("cannot cast '{value}' to a number in column '{column}' (row {row})")]
    PriceCast {
        column: String,
        row: usize,
        value: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
