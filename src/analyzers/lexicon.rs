// Valence-lexicon sentiment engine.
//
// Scores text by summing per-word valences, with negation flips and
// booster words, then squashes the sum into [-1, 1] with the usual
// alpha-normalization. This mirrors how compound-score lexicon analyzers
// behave, shrunk to an embedded table.

use super::traits::{label_for_polarity, Analyzer, SentimentVerdict};
use crate::error::Result;

/// Word valences. Keys are lowercase single words; values roughly span
/// [-3.0, 3.0] before normalization.
const VALENCES: &[(&str, f64)] = &[
    // Positive signals
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("love", 3.2),
    ("loved", 2.9),
    ("like", 1.5),
    ("best", 3.2),
    ("nice", 1.8),
    ("happy", 2.7),
    ("fantastic", 2.6),
    ("wonderful", 2.7),
    ("recommend", 1.5),
    ("perfect", 2.7),
    ("easy", 1.9),
    ("fast", 1.3),
    ("helpful", 1.8),
    ("quality", 1.4),
    ("works", 1.2),
    ("worth", 1.7),
    ("cheap", 0.8),
    ("affordable", 1.5),
    // Negative signals
    ("bad", -2.5),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("worst", -3.1),
    ("hate", -2.7),
    ("hated", -2.6),
    ("poor", -2.1),
    ("broken", -1.8),
    ("broke", -1.6),
    ("slow", -1.2),
    ("disappointed", -2.1),
    ("disappointing", -2.2),
    ("useless", -1.9),
    ("waste", -2.2),
    ("expensive", -1.0),
    ("overpriced", -1.8),
    ("refund", -1.1),
    ("problem", -1.4),
    ("defective", -2.0),
    ("fails", -1.6),
    ("failed", -1.6),
];

/// Words that negate the valence of a following sentiment word.
const NEGATIONS: &[&str] = &["not", "no", "never", "neither", "nobody", "cannot", "without"];

/// Intensity modifiers applied to the next sentiment word.
const BOOSTERS: &[(&str, f64)] = &[
    ("very", 0.293),
    ("really", 0.293),
    ("extremely", 0.293),
    ("absolutely", 0.293),
    ("so", 0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("barely", -0.293),
];

/// Scaling factor for mapping a raw valence sum into [-1, 1].
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Negation within this many tokens before a sentiment word flips it.
const NEGATION_WINDOW: usize = 3;

/// Damping applied when a sentiment word is negated. A flat -1.0 flip
/// overstates how much "not good" differs from "bad".
const NEGATION_SCALAR: f64 = -0.74;

/// Embedded valence-lexicon analyzer.
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for LexiconAnalyzer {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn analyze(&self, text: &str) -> Result<SentimentVerdict> {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|w| !w.is_empty())
            .collect();

        let mut sum = 0.0_f64;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&(_, valence)) = VALENCES.iter().find(|&&(w, _)| w == token.as_str()) else {
                continue;
            };

            let mut valence = valence;
            let window_start = i.saturating_sub(NEGATION_WINDOW);
            for prior in &tokens[window_start..i] {
                if NEGATIONS.contains(&prior.as_str()) || prior.ends_with("n't") {
                    valence *= NEGATION_SCALAR;
                    break;
                }
            }
            // Boosters only apply to the immediately preceding token
            if i > 0 {
                if let Some(&(_, boost)) = BOOSTERS.iter().find(|(w, _)| *w == tokens[i - 1]) {
                    valence += boost * valence.signum();
                }
            }
            sum += valence;
        }

        let polarity = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();

        Ok(SentimentVerdict {
            text: text.to_string(),
            label: label_for_polarity(polarity),
            polarity,
        })
    }
}
