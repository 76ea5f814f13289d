// TF-IDF keyword auto-extraction.
//
// Used when the caller asks for a keyword report without naming keywords.
// Each sentence is treated as a separate document for IDF computation, so
// words that appear in every sentence get downweighted while distinctive
// words get boosted.

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::info;

use crate::error::{QuorumError, Result};

/// Extract the top `top_n` corpus keywords by TF-IDF score, with English
/// stop words removed.
pub fn extract_keywords(sentences: &[String], top_n: usize) -> Result<Vec<String>> {
    if sentences.is_empty() {
        return Err(QuorumError::EmptyCorpus);
    }

    let stop_words: Vec<String> = get(LANGUAGE::English);

    let params = TfIdfParams::UnprocessedDocuments(sentences, &stop_words, None);
    let tfidf = TfIdf::new(params);

    let ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(top_n);
    if ranked.is_empty() {
        return Err(QuorumError::InvalidInput(format!(
            "TF-IDF produced no keywords from {} sentences",
            sentences.len()
        )));
    }

    info!(
        keywords = ranked.len(),
        top_keyword = %ranked[0].0,
        "Extracted corpus keywords"
    );

    Ok(ranked.into_iter().map(|(word, _)| word).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_corpus() -> Vec<String> {
        vec![
            "The battery life on this phone is outstanding".to_string(),
            "Battery drains quickly when the screen brightness is high".to_string(),
            "The screen is bright and the colors are vivid".to_string(),
            "Shipping took two weeks which was frustrating".to_string(),
            "Customer service resolved my shipping complaint fast".to_string(),
        ]
    }

    #[test]
    fn extracts_distinctive_words() {
        let keywords = extract_keywords(&sample_corpus(), 10).unwrap();
        assert!(!keywords.is_empty());
        assert!(keywords.len() <= 10);
        let joined = keywords.join(" ");
        assert!(
            joined.contains("battery") || joined.contains("screen") || joined.contains("shipping"),
            "expected a corpus topic in {keywords:?}"
        );
    }

    #[test]
    fn respects_top_n() {
        let keywords = extract_keywords(&sample_corpus(), 3).unwrap();
        assert!(keywords.len() <= 3);
    }

    #[test]
    fn empty_corpus_errors() {
        assert!(matches!(
            extract_keywords(&[], 5),
            Err(QuorumError::EmptyCorpus)
        ));
    }
}
