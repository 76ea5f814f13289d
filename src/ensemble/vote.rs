// Vote tallies and normalized verdicts.
//
// A tally counts the three classifiers' labels for one sentence. The
// confidence scale is deliberately coarse: unanimous agreement is 1,
// a 2-1 majority is 1/3, and a full three-way split is 0.

use serde::Serialize;

use crate::analyzers::Label;
use crate::error::{QuorumError, Result};

/// Confidence assigned to a 2-1 majority.
pub const MAJORITY_CONFIDENCE: f64 = 1.0 / 3.0;

/// Three-way vote count for one sentence. Invariant: the buckets sum to 3,
/// one vote per classifier, no abstentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTally {
    pub positive: u8,
    pub negative: u8,
    pub neutral: u8,
}

impl VoteTally {
    /// Count labels into a tally. Order-independent.
    pub fn from_labels(labels: impl IntoIterator<Item = Label>) -> Self {
        let mut tally = Self {
            positive: 0,
            negative: 0,
            neutral: 0,
        };
        for label in labels {
            match label {
                Label::Positive => tally.positive += 1,
                Label::Negative => tally.negative += 1,
                Label::Neutral => tally.neutral += 1,
            }
        }
        tally
    }

    /// Check the one-vote-per-classifier invariant. A tally not summing to
    /// 3 means an adapter broke its contract.
    pub fn validate(&self) -> Result<()> {
        if self.positive + self.negative + self.neutral != 3 {
            return Err(QuorumError::InvalidVoteTally {
                positive: self.positive,
                negative: self.negative,
                neutral: self.neutral,
            });
        }
        Ok(())
    }

    /// Confidence policy: 1 for a unanimous bucket, 1/3 for a 2-1 majority,
    /// 0 for the 1-1-1 split.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        let buckets = [self.positive, self.negative, self.neutral];
        if buckets.contains(&3) {
            1.0
        } else if buckets.contains(&2) {
            MAJORITY_CONFIDENCE
        } else {
            0.0
        }
    }

    /// Label policy: the bucket with strictly more votes than both others
    /// wins. The 1-1-1 split has no strict winner and falls back to
    /// neutral — that tie-break is the defined behavior, not a gap.
    #[must_use]
    pub fn winner(&self) -> Label {
        if self.positive > self.negative && self.positive > self.neutral {
            Label::Positive
        } else if self.negative > self.positive && self.negative > self.neutral {
            Label::Negative
        } else {
            Label::Neutral
        }
    }
}

/// The ensemble's single reconciled verdict for one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedVerdict {
    pub label: Label,
    /// One of {0, 1/3, 1}.
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_each_label() {
        let tally =
            VoteTally::from_labels([Label::Positive, Label::Positive, Label::Negative]);
        assert_eq!(tally.positive, 2);
        assert_eq!(tally.negative, 1);
        assert_eq!(tally.neutral, 0);
        assert!(tally.validate().is_ok());
    }

    #[test]
    fn tally_not_summing_to_three_is_rejected() {
        let tally = VoteTally::from_labels([Label::Positive, Label::Negative]);
        assert!(matches!(
            tally.validate(),
            Err(crate::QuorumError::InvalidVoteTally { .. })
        ));
    }

    #[test]
    fn unanimous_confidence_is_one() {
        let tally =
            VoteTally::from_labels([Label::Neutral, Label::Neutral, Label::Neutral]);
        assert_eq!(tally.confidence(), 1.0);
        assert_eq!(tally.winner(), Label::Neutral);
    }

    #[test]
    fn majority_confidence_is_one_third() {
        let tally =
            VoteTally::from_labels([Label::Positive, Label::Positive, Label::Negative]);
        assert_eq!(tally.confidence(), MAJORITY_CONFIDENCE);
        assert_eq!(tally.winner(), Label::Positive);
    }

    #[test]
    fn full_split_is_neutral_with_zero_confidence() {
        let tally =
            VoteTally::from_labels([Label::Positive, Label::Negative, Label::Neutral]);
        assert_eq!(tally.confidence(), 0.0);
        assert_eq!(tally.winner(), Label::Neutral);
    }

    #[test]
    fn winner_is_order_independent() {
        let a = VoteTally::from_labels([Label::Negative, Label::Positive, Label::Negative]);
        let b = VoteTally::from_labels([Label::Negative, Label::Negative, Label::Positive]);
        assert_eq!(a, b);
        assert_eq!(a.winner(), Label::Negative);
    }
}
