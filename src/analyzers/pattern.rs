// Pattern-lexicon sentiment engine.
//
// Unlike the valence engine, which sums word scores, this one averages the
// polarity of every matched pattern word, the way pattern-library taggers
// score adjectives. Averaging makes long mixed texts drift toward neutral
// instead of saturating.

use super::traits::{label_for_polarity, Analyzer, SentimentVerdict};
use crate::error::Result;

/// Per-word polarities in [-1.0, 1.0], adjective-heavy like the pattern
/// lexicons this engine imitates.
const POLARITIES: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("best", 1.0),
    ("better", 0.5),
    ("nice", 0.6),
    ("happy", 0.8),
    ("love", 0.5),
    ("perfect", 1.0),
    ("easy", 0.43),
    ("helpful", 0.4),
    ("reliable", 0.5),
    ("comfortable", 0.5),
    ("worth", 0.3),
    ("fast", 0.2),
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("worse", -0.5),
    ("poor", -0.4),
    ("hate", -0.8),
    ("slow", -0.3),
    ("broken", -0.4),
    ("disappointing", -0.6),
    ("disappointed", -0.6),
    ("useless", -0.5),
    ("cheap", -0.4),
    ("expensive", -0.5),
    ("defective", -0.7),
    ("annoying", -0.8),
    ("boring", -1.0),
];

/// Intensifiers multiply the polarity of the next matched word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.5),
    ("hardly", 0.4),
];

/// Negators invert and damp the polarity of the next matched word.
const NEGATORS: &[&str] = &["not", "no", "never", "nor"];

/// Damping used when a negator precedes a sentiment word.
const NEGATION_FACTOR: f64 = -0.5;

/// Embedded pattern-lexicon analyzer.
pub struct PatternAnalyzer;

impl PatternAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PatternAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for PatternAnalyzer {
    fn name(&self) -> &'static str {
        "pattern"
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

        let mut matched = Vec::new();
        for (i, token) in tokens.iter().enumerate() {
            let Some(&(_, polarity)) = POLARITIES.iter().find(|&&(w, _)| w == token.as_str()) else {
                continue;
            };

            let mut polarity = polarity;
            if i > 0 {
                let prior = tokens[i - 1].as_str();
                if let Some(&(_, factor)) = INTENSIFIERS.iter().find(|(w, _)| *w == prior) {
                    polarity = (polarity * factor).clamp(-1.0, 1.0);
                } else if NEGATORS.contains(&prior) || prior.ends_with("n't") {
                    polarity *= NEGATION_FACTOR;
                }
            }
            matched.push(polarity);
        }

        let polarity = if matched.is_empty() {
            0.0
        } else {
            matched.iter().sum::<f64>() / matched.len() as f64
        };

        Ok(SentimentVerdict {
            text: text.to_string(),
            label: label_for_polarity(polarity),
            polarity,
        })
    }
}
