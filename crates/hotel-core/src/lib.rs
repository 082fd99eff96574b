//! Hotel offer batch processing.
//!
//! This crate ties the pipeline together:
//!
//! - [`BatchProcessor`]: concatenate raw batches, enrich, classify and encode
//!   the valid and invalid sets as two Parquet payloads
//! - [`EventHandler`]: react to a storage notification for a staged CSV, read
//!   every CSV of its ingestion directory and upload both payloads under
//!   date-partitioned keys
//! - [`Settings`]: stage prefixes and the city constant

pub mod error;
pub mod handler;
pub mod processor;
pub mod settings;

pub use error::{CoreError, Result};
pub use handler::{
    BatchReport, EventHandler, HandlerOutcome, InvocationResponse, S3Event, S3EventRecord,
    SkipReason, handle_event,
    process_prefix,
};
pub use processor::{BatchProcessor, RuleCount, SplitPayloads, SplitSummary, concat_batches};
pub use settings::Settings;
