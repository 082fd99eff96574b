//! Polars column readers and text parsers.
//!
//! Raw listing batches arrive with whatever dtypes the producer chose (all text
//! from CSV, or typed columns when a batch is built in memory). These helpers read
//! a column through a single representation so callers never branch on dtype.

use polars::prelude::*;

/// Reads a column through its text rendering.
///
/// Non-string columns are cast to `String` first; nulls stay null.
pub fn text_column(df: &DataFrame, name: &str) -> PolarsResult<StringChunked> {
    let column = df.column(name)?;
    let text = column.cast(&DataType::String)?;
    Ok(text.str()?.clone())
}

/// Collects a numeric column as `f64` values.
///
/// Intended for columns that are already typed (enriched batches). String
/// columns should go through [`parse_f64`] instead, since a Polars cast turns
/// unparsable text into null silently.
pub fn f64_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.into_iter().collect())
}

/// Collects an integer column as `i64` values.
pub fn i64_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<i64>>> {
    let column = df.column(name)?.cast(&DataType::Int64)?;
    Ok(column.i64()?.into_iter().collect())
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses a string as `i64`, returning `None` for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}
