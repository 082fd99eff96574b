//! Raw listing ingestion utilities.
//!
//! This crate turns the objects staged under an ingestion directory into raw
//! Polars batches, one per source CSV file.
//!
//! # Features
//!
//! - **CSV Loading**: Parse downloaded CSV buffers with every column kept as text
//! - **Ingestion Directories**: Recognize `ingestion_YYYYMMDD_HHMMSS` directories
//!   and extract their timestamp
//! - **Key Discovery**: Derive directory prefixes and batch names from object keys,
//!   and select the CSV objects of a listing
//!
//! # Example
//!
//! ```ignore
//! use hotel_ingest::{IngestionDirectory, csv_keys, read_csv_bytes};
//!
//! let dir = IngestionDirectory::from_object_key("raw/ingestion_20260216_093000/a.csv")
//!     .expect("ingestion directory");
//!
//! for key in csv_keys(&listed_keys) {
//!     let batch = read_csv_bytes(&key, &store.get_object(bucket, &key)?)?;
//! }
//! ```

mod csv;
mod directory;
mod discovery;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{read_csv_bytes, validate_encoding};

// === Ingestion Directories ===
pub use directory::{IngestionDirectory, extract_ingestion_datetime};

// === Key Discovery ===
pub use discovery::{batch_name, csv_keys, directory_prefix, is_csv_key};
