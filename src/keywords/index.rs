// Keyword-to-sentence index with bounded samples.

use std::collections::HashMap;

use tracing::debug;

use super::stem::KeywordStemmer;

/// Most sample sentences kept per keyword. Occurrence counts are not
/// capped — only the sentences carried forward into result building.
pub const SAMPLE_CAP: usize = 4;

/// Maps each stemmed keyword to up to [`SAMPLE_CAP`] example sentences and
/// an unbounded occurrence count. A sentence containing several keywords is
/// attached to every one of them; there is no deduplication across keywords.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    samples: HashMap<String, Vec<String>>,
    counts: HashMap<String, usize>,
}

impl KeywordIndex {
    /// Scan the corpus for the given stemmed keywords.
    ///
    /// A keyword matches a sentence when its stem equals one of the
    /// sentence's stemmed tokens — never by substring. Zero-match keywords
    /// keep an empty sample list and a zero count.
    pub fn build(sentences: &[String], stemmed_keywords: &[String]) -> Self {
        let stemmer = KeywordStemmer::new();
        let mut index = Self::default();

        for keyword in stemmed_keywords {
            index.samples.insert(keyword.clone(), Vec::new());
            index.counts.insert(keyword.clone(), 0);
        }

        for sentence in sentences {
            let tokens = stemmer.stemmed_tokens(sentence);
            for keyword in stemmed_keywords {
                if !tokens.contains(keyword) {
                    continue;
                }
                *index.counts.entry(keyword.clone()).or_insert(0) += 1;
                let samples = index.samples.entry(keyword.clone()).or_default();
                if samples.len() < SAMPLE_CAP {
                    samples.push(sentence.clone());
                }
            }
        }

        debug!(
            keywords = stemmed_keywords.len(),
            sentences = sentences.len(),
            "Built keyword index"
        );
        index
    }

    /// Sample sentences for a keyword, in corpus order.
    pub fn samples(&self, keyword: &str) -> &[String] {
        self.samples.get(keyword).map_or(&[], Vec::as_slice)
    }

    /// Total occurrence count for a keyword.
    pub fn count(&self, keyword: &str) -> usize {
        self.counts.get(keyword).copied().unwrap_or(0)
    }

    /// The full keyword → occurrence-count map.
    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matches_inflected_forms() {
        let corpus = sentences(&[
            "The price was fair.",
            "Prices went up again.",
            "Pricing is confusing.",
        ]);
        let index = KeywordIndex::build(&corpus, &["price".to_string()]);
        assert_eq!(index.count("price"), 3);
        assert_eq!(index.samples("price").len(), 3);
    }

    #[test]
    fn does_not_match_substrings() {
        let corpus = sentences(&["The apprentice shipped it."]);
        let index = KeywordIndex::build(&corpus, &["price".to_string()]);
        assert_eq!(index.count("price"), 0);
        assert!(index.samples("price").is_empty());
    }

    #[test]
    fn samples_capped_counts_unbounded() {
        let corpus = sentences(&[
            "price one",
            "price two",
            "price three",
            "price four",
            "price five",
            "price six",
        ]);
        let index = KeywordIndex::build(&corpus, &["price".to_string()]);
        assert_eq!(index.samples("price").len(), SAMPLE_CAP);
        assert_eq!(index.count("price"), 6);
        // Samples keep the raw sentences, in corpus order
        assert_eq!(index.samples("price")[0], "price one");
        assert_eq!(index.samples("price")[3], "price four");
    }

    #[test]
    fn sentence_with_two_keywords_attaches_to_both() {
        let corpus = sentences(&["The price of the battery is high."]);
        let index =
            KeywordIndex::build(&corpus, &["price".to_string(), "batteri".to_string()]);
        assert_eq!(index.count("price"), 1);
        assert_eq!(index.count("batteri"), 1);
        assert_eq!(index.samples("price"), index.samples("batteri"));
    }

    #[test]
    fn empty_corpus_yields_zero_counts() {
        let index = KeywordIndex::build(&[], &["price".to_string()]);
        assert_eq!(index.count("price"), 0);
        assert!(index.samples("price").is_empty());
        assert_eq!(index.counts().len(), 1);
    }
}
