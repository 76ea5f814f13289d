// Tokenization and stemming helpers.
//
// Keywords and sentence tokens go through the same Snowball stemmer, so
// "price" matches "prices" and "pricing" but never a substring of an
// unrelated token.

use std::collections::HashSet;

use rust_stemmers::{Algorithm, Stemmer};

/// Wraps the Snowball English stemmer with the tokenize-then-stem policy
/// used on both sides of keyword matching.
pub struct KeywordStemmer {
    stemmer: Stemmer,
}

impl KeywordStemmer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Stem a single lowercased word.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(&word.to_lowercase()).into_owned()
    }

    /// Stem a list of keywords, deduplicating while preserving first-seen
    /// order. Blank keywords are dropped.
    pub fn stem_keywords(&self, keywords: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut stemmed = Vec::new();
        for keyword in keywords {
            let trimmed = keyword.trim();
            if trimmed.is_empty() {
                continue;
            }
            let stem = self.stem(trimmed);
            if seen.insert(stem.clone()) {
                stemmed.push(stem);
            }
        }
        stemmed
    }

    /// The set of stemmed tokens in a sentence.
    pub fn stemmed_tokens(&self, sentence: &str) -> HashSet<String> {
        tokenize(sentence).map(|word| self.stem(word)).collect()
    }
}

impl Default for KeywordStemmer {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a sentence into alphanumeric word tokens.
pub fn tokenize(sentence: &str) -> impl Iterator<Item = &str> {
    sentence
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_punctuation() {
        let tokens: Vec<&str> = tokenize("The price, frankly, was too high!").collect();
        assert_eq!(
            tokens,
            vec!["The", "price", "frankly", "was", "too", "high"]
        );
    }

    #[test]
    fn stem_normalizes_plurals() {
        let stemmer = KeywordStemmer::new();
        assert_eq!(stemmer.stem("prices"), stemmer.stem("price"));
        assert_eq!(stemmer.stem("batteries"), stemmer.stem("battery"));
    }

    #[test]
    fn stem_is_case_insensitive() {
        let stemmer = KeywordStemmer::new();
        assert_eq!(stemmer.stem("Shipping"), stemmer.stem("shipping"));
    }

    #[test]
    fn stem_keywords_dedupes_inflected_forms() {
        let stemmer = KeywordStemmer::new();
        let stems = stemmer.stem_keywords(&[
            "price".to_string(),
            "prices".to_string(),
            "battery".to_string(),
            "  ".to_string(),
        ]);
        assert_eq!(stems.len(), 2);
        assert_eq!(stems[0], stemmer.stem("price"));
    }

    #[test]
    fn stemmed_tokens_contains_keyword_stem() {
        let stemmer = KeywordStemmer::new();
        let tokens = stemmer.stemmed_tokens("Prices keep rising every year.");
        assert!(tokens.contains(&stemmer.stem("price")));
        // Not a substring match: "rising" does not put "is" in the set
        assert!(!tokens.contains("is"));
    }
}
