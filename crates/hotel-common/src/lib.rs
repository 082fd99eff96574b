//! Shared utilities for the hotel offers ETL crates.
//!
//! This crate provides the Polars column readers and text parsers used by the
//! transformation and validation stages.

pub mod columns;

// Re-export commonly used functions at crate root for convenience
pub use columns::{f64_values, i64_values, parse_f64, parse_i64, text_column};
