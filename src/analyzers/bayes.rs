// Multinomial naive-Bayes sentiment engine.
//
// Scores text against an embedded table of per-class token counts, the
// frozen output of training on a small labeled review set. Tokens missing
// from the vocabulary are ignored; Laplace smoothing keeps zero-count
// classes from collapsing the posterior. Polarity is the difference of the
// positive and negative posteriors, so the shared threshold policy applies
// unchanged.

use super::traits::{label_for_polarity, Analyzer, SentimentVerdict};
use crate::error::Result;

/// Token counts per class: (token, positive, negative, neutral).
const TOKEN_COUNTS: &[(&str, u32, u32, u32)] = &[
    ("good", 48, 6, 12),
    ("great", 62, 3, 5),
    ("excellent", 35, 1, 2),
    ("love", 51, 4, 4),
    ("best", 40, 5, 6),
    ("nice", 28, 4, 9),
    ("happy", 30, 3, 5),
    ("perfect", 33, 2, 3),
    ("recommend", 26, 5, 6),
    ("easy", 22, 3, 8),
    ("fast", 18, 4, 9),
    ("quality", 24, 9, 10),
    ("works", 20, 8, 11),
    ("worth", 19, 5, 6),
    ("comfortable", 16, 2, 4),
    ("bad", 5, 44, 9),
    ("terrible", 2, 38, 3),
    ("awful", 1, 30, 2),
    ("horrible", 1, 29, 2),
    ("worst", 2, 41, 3),
    ("hate", 3, 33, 4),
    ("poor", 4, 31, 6),
    ("broken", 3, 27, 5),
    ("slow", 5, 24, 8),
    ("disappointed", 2, 28, 4),
    ("waste", 2, 26, 3),
    ("refund", 3, 22, 5),
    ("useless", 1, 21, 2),
    ("problem", 6, 25, 10),
    ("defective", 1, 19, 2),
    ("returned", 4, 18, 6),
    ("stopped", 3, 17, 7),
    ("okay", 7, 6, 22),
    ("fine", 9, 7, 20),
    ("average", 4, 6, 18),
    ("ordinary", 2, 3, 12),
    ("expected", 8, 9, 16),
    ("arrived", 10, 9, 19),
    ("product", 25, 22, 24),
    ("price", 15, 12, 14),
];

/// Class priors as raw document counts. Balanced on purpose: an
/// out-of-vocabulary text should land exactly neutral.
const CLASS_DOCS: (u32, u32, u32) = (100, 100, 100);

/// Embedded naive-Bayes analyzer.
pub struct BayesAnalyzer;

impl BayesAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BayesAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for BayesAnalyzer {
    fn name(&self) -> &'static str {
        "bayes"
    }

    fn analyze(&self, text: &str) -> Result<SentimentVerdict> {
        let vocab_size = TOKEN_COUNTS.len() as f64;
        let totals = (
            TOKEN_COUNTS.iter().map(|&(_, p, _, _)| p).sum::<u32>() as f64,
            TOKEN_COUNTS.iter().map(|&(_, _, n, _)| n).sum::<u32>() as f64,
            TOKEN_COUNTS.iter().map(|&(_, _, _, u)| u).sum::<u32>() as f64,
        );

        let prior_total = (CLASS_DOCS.0 + CLASS_DOCS.1 + CLASS_DOCS.2) as f64;
        let mut log_pos = (CLASS_DOCS.0 as f64 / prior_total).ln();
        let mut log_neg = (CLASS_DOCS.1 as f64 / prior_total).ln();
        let mut log_neu = (CLASS_DOCS.2 as f64 / prior_total).ln();

        for word in text.split_whitespace() {
            let token = word
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            let Some(&(_, pos, neg, neu)) = TOKEN_COUNTS.iter().find(|(w, ..)| *w == token)
            else {
                continue;
            };
            log_pos += ((pos as f64 + 1.0) / (totals.0 + vocab_size)).ln();
            log_neg += ((neg as f64 + 1.0) / (totals.1 + vocab_size)).ln();
            log_neu += ((neu as f64 + 1.0) / (totals.2 + vocab_size)).ln();
        }

        // Normalize in probability space, shifted by the max to avoid
        // underflow on long texts.
        let max = log_pos.max(log_neg).max(log_neu);
        let (e_pos, e_neg, e_neu) = (
            (log_pos - max).exp(),
            (log_neg - max).exp(),
            (log_neu - max).exp(),
        );
        let norm = e_pos + e_neg + e_neu;
        let polarity = (e_pos - e_neg) / norm;

        Ok(SentimentVerdict {
            text: text.to_string(),
            label: label_for_polarity(polarity),
            polarity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::Label;

    #[test]
    fn out_of_vocabulary_text_is_neutral() {
        let v = BayesAnalyzer::new().analyze("zxqv frobnicate blorp").unwrap();
        assert_eq!(v.label, Label::Neutral);
        assert!(v.polarity.abs() < 1e-9, "got {}", v.polarity);
    }

    #[test]
    fn positive_evidence_scores_positive() {
        let v = BayesAnalyzer::new()
            .analyze("great quality, love it")
            .unwrap();
        assert_eq!(v.label, Label::Positive);
    }

    #[test]
    fn negative_evidence_scores_negative() {
        let v = BayesAnalyzer::new()
            .analyze("terrible, broken on arrival, want a refund")
            .unwrap();
        assert_eq!(v.label, Label::Negative);
    }

    #[test]
    fn neutral_evidence_scores_neutral() {
        let v = BayesAnalyzer::new().analyze("it arrived, it is okay").unwrap();
        assert_eq!(v.label, Label::Neutral);
    }

    #[test]
    fn polarity_bounded() {
        let v = BayesAnalyzer::new()
            .analyze("worst awful terrible hate waste useless defective")
            .unwrap();
        assert!(v.polarity >= -1.0 && v.polarity <= 1.0);
        assert_eq!(v.label, Label::Negative);
    }

    #[test]
    fn long_text_does_not_underflow() {
        let text = "great ".repeat(500);
        let v = BayesAnalyzer::new().analyze(&text).unwrap();
        assert_eq!(v.label, Label::Positive);
        assert!(v.polarity.is_finite());
    }
}
