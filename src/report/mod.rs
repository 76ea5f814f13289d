// Report types — the batch-level and per-keyword summaries handed to the
// presentation layer (terminal or JSON).

pub mod terminal;

use std::collections::HashMap;

use serde::Serialize;

use crate::ensemble::BatchTotals;
use crate::error::Result;

/// Batch-level totals for a classified corpus.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub total_positive: usize,
    pub total_negative: usize,
    pub total_neutral: usize,
    /// Mean per-sentence confidence in [0, 1].
    pub average_confidence: f64,
}

impl BatchReport {
    /// Reduce accumulated totals to the reporting contract.
    pub fn from_totals(totals: &BatchTotals) -> Result<Self> {
        Ok(Self {
            total_positive: totals.positive,
            total_negative: totals.negative,
            total_neutral: totals.neutral,
            average_confidence: totals.mean_confidence()?,
        })
    }

    /// Average confidence as a percentage, rounded to two decimals.
    #[must_use]
    pub fn average_confidence_percent(&self) -> f64 {
        (self.average_confidence * 100.0 * 100.0).round() / 100.0
    }
}

/// Sentiment summary for one keyword, computed over its sampled sentences.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordResult {
    /// The stemmed keyword the sentences were matched against.
    pub keyword: String,
    /// The sampled sentences (at most the sample cap).
    pub sentences: Vec<String>,
    /// Positive share of all votes cast for the sampled sentences, in [0, 1].
    pub prominence: f64,
    /// Mean per-sentence confidence over the sample, in [0, 1].
    pub average_confidence: f64,
}

/// Keyword report: one result per keyword with at least one match, plus the
/// raw occurrence counters for every requested keyword.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordReport {
    pub results: Vec<KeywordResult>,
    pub counts: HashMap<String, usize>,
}
