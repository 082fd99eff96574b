//! Ingestion directory recognition.
//!
//! Upstream scrapers stage each run under a directory named
//! `ingestion_YYYYMMDD_HHMMSS`. Only objects inside such a directory are
//! processed; the timestamp drives the output partition.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::discovery::{batch_name, directory_prefix};

static INGESTION_DIR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ingestion_(\d{8})_(\d{6})").expect("Invalid ingestion directory regex")
});

/// Extracts the ingestion timestamp embedded in a prefix.
///
/// Returns `None` when the prefix contains no `ingestion_YYYYMMDD_HHMMSS`
/// segment, or when the digits do not form a valid calendar date and time.
pub fn extract_ingestion_datetime(prefix: &str) -> Option<NaiveDateTime> {
    let captures = INGESTION_DIR_REGEX.captures(prefix)?;
    let stamp = format!("{}{}", &captures[1], &captures[2]);
    match NaiveDateTime::parse_from_str(&stamp, "%Y%m%d%H%M%S") {
        Ok(datetime) => Some(datetime),
        Err(error) => {
            tracing::warn!(prefix, %error, "ingestion directory has an invalid timestamp");
            None
        }
    }
}

/// A recognized ingestion directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionDirectory {
    /// Directory prefix including the trailing `/`.
    pub prefix: String,
    /// Last path segment, used as the output file name.
    pub batch_name: String,
    /// Timestamp parsed from the directory name.
    pub ingested_at: NaiveDateTime,
}

impl IngestionDirectory {
    /// Recognizes a directory prefix such as `raw/ingestion_20260216_093000/`.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        let ingested_at = extract_ingestion_datetime(prefix)?;
        let batch_name = batch_name(prefix)?;
        Some(Self {
            prefix: prefix.to_string(),
            batch_name: batch_name.to_string(),
            ingested_at,
        })
    }

    /// Recognizes the directory enclosing an object key.
    pub fn from_object_key(key: &str) -> Option<Self> {
        Self::from_prefix(directory_prefix(key))
    }
}
