//! Storage error types.

use std::path::PathBuf;

use thiserror::Error;

/// Object storage operation error.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No object under the key.
    #[error("object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },

    /// Local I/O failure.
    #[error("failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bucket or key cannot address an object.
    #[error("invalid object key '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
