//! Output generation for classified hotel offer batches.
//!
//! - [`encode_parquet`] / [`decode_parquet`]: columnar payloads
//! - [`build_partitioned_key`]: Hive-style `ingestion_date=YYYY-MM-DD` keys

mod error;
pub mod parquet;
pub mod partition;

pub use error::{OutputError, Result};
pub use parquet::{decode_parquet, encode_parquet};
pub use partition::{PARQUET_EXTENSION, build_partitioned_key, swap_stage_prefix};
