//! Hotel offer transformation crate.
//!
//! Turns a raw listing batch (one row per scraped offer, every field as text)
//! into an enriched batch with typed and derived columns.
//!
//! # Overview
//!
//! This crate provides:
//! - **Listing transformation**: [`transform_listings`] and [`ListingTransformer`]
//! - **Column names**: the source CSV contract and the derived columns ([`columns`])
//! - **Normalization functions**: dates, prices, ratings and location text
//!
//! # Example
//!
//! ```ignore
//! use hotel_transform::{ListingTransformer, transform_listings};
//!
//! // Default city
//! let enriched = transform_listings(&raw)?;
//!
//! // Explicit city constant
//! let enriched = ListingTransformer::new("Córdoba").transform(&raw)?;
//! ```
//!
//! # Design Principles
//!
//! - **Non-mutating**: the caller's batch is never modified; a new frame is returned
//! - **Fail-fast**: an unparsable date or price aborts the whole batch
//! - **Explicit absence**: missing ratings and scores are nulls, never sentinels

pub mod columns;
mod error;
pub mod normalization;
mod transformer;

// Error type
pub use error::{Result, TransformError};

// Execution
pub use transformer::{DEFAULT_CITY, ListingTransformer, transform_listings};
