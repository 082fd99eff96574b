//! Batch-level classification and splitting.

use std::collections::BTreeMap;

use hotel_common::{f64_values, i64_values};
use hotel_transform::columns::{FINAL_PRICE, NIGHTS, SCORE};
use polars::prelude::*;
use tracing::debug;

use crate::error::{Result, ValidateError};
use crate::rules::{RejectionRule, evaluate_row};

const PREDICATE_COLUMNS: &[&str] = &[FINAL_PRICE, NIGHTS, SCORE];

/// Per-row validity of an enriched batch.
#[derive(Debug, Clone)]
pub struct ValidityMask {
    /// `true` for rows routed to the valid set.
    pub mask: BooleanChunked,
    valid: usize,
    violations: BTreeMap<RejectionRule, usize>,
}

impl ValidityMask {
    pub fn len(&self) -> usize {
        self.mask.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    pub fn valid_count(&self) -> usize {
        self.valid
    }

    pub fn invalid_count(&self) -> usize {
        self.len() - self.valid_count()
    }

    /// Rows violating `rule`. A row violating several rules counts once per rule.
    pub fn violations(&self, rule: RejectionRule) -> usize {
        self.violations.get(&rule).copied().unwrap_or(0)
    }

    /// Violation counts for every rule, in rule order.
    pub fn violation_counts(&self) -> Vec<(RejectionRule, usize)> {
        RejectionRule::all()
            .iter()
            .map(|&rule| (rule, self.violations(rule)))
            .collect()
    }
}

/// Evaluate the validity predicate over every row of an enriched batch.
pub fn validity_mask(df: &DataFrame) -> Result<ValidityMask> {
    for &column in PREDICATE_COLUMNS {
        if df.column(column).is_err() {
            return Err(ValidateError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let prices = f64_values(df, FINAL_PRICE)?;
    let nights = i64_values(df, NIGHTS)?;
    let scores = f64_values(df, SCORE)?;

    let mut violations = BTreeMap::new();
    let flags: Vec<bool> = prices
        .into_iter()
        .zip(nights)
        .zip(scores)
        .map(|((price, nights), score)| {
            let verdict = evaluate_row(price, nights, score);
            for rule in &verdict.violations {
                *violations.entry(*rule).or_insert(0) += 1;
            }
            verdict.is_valid()
        })
        .collect();

    Ok(ValidityMask {
        mask: BooleanChunked::from_slice("valid".into(), &flags),
        valid: flags.iter().filter(|&&valid| valid).count(),
        violations,
    })
}

/// An enriched batch partitioned into valid and invalid rows.
#[derive(Debug, Clone)]
pub struct SplitFrames {
    pub valid: DataFrame,
    pub invalid: DataFrame,
    pub mask: ValidityMask,
}

/// Partition an enriched batch by the validity predicate.
///
/// Both frames keep the full column set and the input row order. Either may
/// have zero rows.
pub fn split_by_validity(df: &DataFrame) -> Result<SplitFrames> {
    let mask = validity_mask(df)?;
    let valid = df.filter(&mask.mask)?;
    let invalid = df.filter(&!&mask.mask)?;

    debug!(
        rows = df.height(),
        valid = valid.height(),
        invalid = invalid.height(),
        "Split enriched batch by validity"
    );

    Ok(SplitFrames {
        valid,
        invalid,
        mask,
    })
}
