// Analyzer trait — the swap-ready abstraction.
//
// Every sentiment engine is normalized behind this one contract: given a
// sequence of texts, return one verdict per text, in the same order. The
// reference engines are pure local computations, but the contract still
// returns Result so a failing engine aborts the batch instead of silently
// degrading it to a two-classifier vote.

use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// Polarity above this is classified positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Polarity below this is classified negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Positive => write!(f, "positive"),
            Label::Negative => write!(f, "negative"),
            Label::Neutral => write!(f, "neutral"),
        }
    }
}

/// Map a polarity score to a label using the shared threshold policy.
///
/// All reference engines use the same cutoffs (±0.05) so their labels are
/// comparable when tallied.
#[must_use]
pub fn label_for_polarity(polarity: f64) -> Label {
    if polarity > POSITIVE_THRESHOLD {
        Label::Positive
    } else if polarity < NEGATIVE_THRESHOLD {
        Label::Negative
    } else {
        Label::Neutral
    }
}

/// One classifier's sentiment judgment for one sentence.
#[derive(Debug, Clone)]
pub struct SentimentVerdict {
    /// The raw text this verdict was produced for.
    pub text: String,
    /// Three-way label derived from the polarity via the threshold policy.
    pub label: Label,
    /// Numeric polarity in [-1.0, 1.0].
    pub polarity: f64,
}

/// Trait for scoring text sentiment. Implementations are pure and
/// deterministic — the same text always yields the same verdict.
pub trait Analyzer: Send + Sync {
    /// Short engine name, used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Score a single text.
    fn analyze(&self, text: &str) -> Result<SentimentVerdict>;

    /// Score multiple texts, returning verdicts in the same order.
    /// Default implementation calls `analyze` per text — engines can
    /// override for batching if they support it.
    fn analyze_batch(&self, texts: &[String]) -> Result<Vec<SentimentVerdict>> {
        let mut verdicts = Vec::with_capacity(texts.len());
        for text in texts {
            verdicts.push(self.analyze(text)?);
        }
        Ok(verdicts)
    }
}
