//! Batch processing: concatenate, enrich, classify, encode.

use hotel_output::encode_parquet;
use hotel_transform::ListingTransformer;
use hotel_validate::{RejectionRule, split_by_validity};
use polars::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{CoreError, Result};
use crate::settings::Settings;

/// Row counts of a processed batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    /// Rows violating each rule; a row can count under several rules.
    pub rejections: Vec<RuleCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleCount {
    pub rule: RejectionRule,
    pub rows: usize,
}

/// The two encoded payloads of a batch.
#[derive(Debug, Clone)]
pub struct SplitPayloads {
    /// Parquet file of rows passing every rule.
    pub valid: Vec<u8>,
    /// Parquet file of the remaining rows.
    pub invalid: Vec<u8>,
    pub summary: SplitSummary,
}

impl SplitPayloads {
    /// `(valid, invalid)` bytes.
    pub fn into_bytes(self) -> (Vec<u8>, Vec<u8>) {
        (self.valid, self.invalid)
    }
}

/// Turns raw listing batches into valid and invalid Parquet payloads.
///
/// Holds no state between calls and performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    transformer: ListingTransformer,
}

impl BatchProcessor {
    pub fn new(settings: &Settings) -> Self {
        Self {
            transformer: ListingTransformer::new(settings.city()),
        }
    }

    /// Process the batches of one ingestion directory.
    ///
    /// Batches are concatenated in order, so every row of the first batch
    /// precedes every row of the second in both payloads.
    ///
    /// # Errors
    ///
    /// - [`CoreError::EmptyInput`] if there are no batches or no rows
    /// - [`CoreError::Transform`] on an unparsable date or price
    /// - [`CoreError::Serialization`] if a payload cannot be encoded
    pub fn process_batch(&self, batches: &[DataFrame]) -> Result<SplitPayloads> {
        let combined = concat_batches(batches)?;
        let enriched = self.transformer.transform(&combined)?;
        let split = split_by_validity(&enriched)?;

        let valid = encode_parquet(&split.valid)?;
        let invalid = encode_parquet(&split.invalid)?;

        let summary = SplitSummary {
            total_rows: enriched.height(),
            valid_rows: split.mask.valid_count(),
            invalid_rows: split.mask.invalid_count(),
            rejections: split
                .mask
                .violation_counts()
                .into_iter()
                .map(|(rule, rows)| RuleCount { rule, rows })
                .collect(),
        };

        info!(
            batches = batches.len(),
            rows = summary.total_rows,
            valid = summary.valid_rows,
            invalid = summary.invalid_rows,
            non_positive_price = split.mask.violations(RejectionRule::NonPositivePrice),
            non_positive_nights = split.mask.violations(RejectionRule::NonPositiveNights),
            score_out_of_range = split.mask.violations(RejectionRule::ScoreOutOfRange),
            "Processed listing batch"
        );

        Ok(SplitPayloads {
            valid,
            invalid,
            summary,
        })
    }
}

/// Concatenate batches by column name.
///
/// The result has the union of all columns in first-seen order; a batch
/// lacking a column contributes nulls. A column whose dtype differs between
/// batches is read as text everywhere.
pub fn concat_batches(batches: &[DataFrame]) -> Result<DataFrame> {
    let total_rows: usize = batches.iter().map(DataFrame::height).sum();
    if total_rows == 0 {
        return Err(CoreError::EmptyInput {
            batches: batches.len(),
        });
    }
    if let [single] = batches {
        return Ok(single.clone());
    }

    let mut schema: Vec<(PlSmallStr, DataType)> = Vec::new();
    for batch in batches {
        for column in batch.get_columns() {
            match schema.iter_mut().find(|(name, _)| name == column.name()) {
                Some((_, dtype)) if dtype != column.dtype() => *dtype = DataType::String,
                Some(_) => {}
                None => schema.push((column.name().clone(), column.dtype().clone())),
            }
        }
    }

    let mut combined: Option<DataFrame> = None;
    for batch in batches {
        let columns = schema
            .iter()
            .map(|(name, dtype)| match batch.column(name) {
                Ok(column) => column.cast(dtype),
                Err(_) => Ok(Column::full_null(name.clone(), batch.height(), dtype)),
            })
            .collect::<PolarsResult<Vec<Column>>>()?;
        let aligned = DataFrame::new(columns)?;
        match combined.as_mut() {
            Some(acc) => {
                acc.vstack_mut(&aligned)?;
            }
            None => combined = Some(aligned),
        }
    }

    let combined = combined.ok_or(CoreError::EmptyInput {
        batches: batches.len(),
    })?;
    debug!(
        batches = batches.len(),
        rows = combined.height(),
        columns = combined.width(),
        "Concatenated listing batches"
    );
    Ok(combined)
}
