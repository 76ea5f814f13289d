// Per-sentence aggregation and batch-level accumulation.

use serde::Serialize;

use super::vote::{NormalizedVerdict, VoteTally};
use crate::analyzers::{Label, SentimentVerdict};
use crate::error::{QuorumError, Result};

/// Reconcile the three classifiers' verdicts for one sentence.
///
/// Order-independent. The caller is responsible for passing verdicts that
/// belong to the same sentence; the count is validated defensively.
pub fn aggregate(verdicts: &[SentimentVerdict]) -> Result<NormalizedVerdict> {
    if verdicts.len() != 3 {
        return Err(QuorumError::InvalidInput(format!(
            "aggregate expects exactly 3 verdicts, got {}",
            verdicts.len()
        )));
    }

    let tally = VoteTally::from_labels(verdicts.iter().map(|v| v.label));
    tally.validate()?;

    Ok(NormalizedVerdict {
        label: tally.winner(),
        confidence: tally.confidence(),
    })
}

/// Running totals across a batch of normalized verdicts.
///
/// An explicit value threaded through the aggregation loop rather than
/// mutable state on the ensemble, so reusing one ensemble across batches
/// can never leak stale counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BatchTotals {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub confidence_sum: f64,
    pub sentences: usize,
}

impl BatchTotals {
    /// Fold one normalized verdict into the totals.
    pub fn record(&mut self, verdict: &NormalizedVerdict) {
        match verdict.label {
            Label::Positive => self.positive += 1,
            Label::Negative => self.negative += 1,
            Label::Neutral => self.neutral += 1,
        }
        self.confidence_sum += verdict.confidence;
        self.sentences += 1;
    }

    /// Arithmetic mean of all recorded confidences.
    pub fn mean_confidence(&self) -> Result<f64> {
        if self.sentences == 0 {
            return Err(QuorumError::EmptyCorpus);
        }
        Ok(self.confidence_sum / self.sentences as f64)
    }
}
