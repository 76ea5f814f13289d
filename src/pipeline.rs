// Analysis pipeline: run the three classifiers over a corpus, reconcile
// their votes per sentence, and build keyword reports.
//
// The three engines are independent of one another, so a batch run fans
// out across scoped threads and joins the three full verdict lists
// positionally. Reconciliation is per sentence: it needs all three
// verdicts for that sentence, never a partial set — if any engine fails,
// the whole batch aborts rather than reporting a two-classifier vote.

use std::thread::{self, ScopedJoinHandle};

use tracing::{debug, info};

use crate::analyzers::bayes::BayesAnalyzer;
use crate::analyzers::lexicon::LexiconAnalyzer;
use crate::analyzers::pattern::PatternAnalyzer;
use crate::analyzers::{Analyzer, SentimentVerdict};
use crate::ensemble::vote::VoteTally;
use crate::ensemble::{aggregate, BatchTotals, NormalizedVerdict};
use crate::error::{QuorumError, Result};
use crate::keywords::{KeywordIndex, KeywordStemmer};
use crate::report::{KeywordReport, KeywordResult};

/// A classified corpus: one normalized verdict per input sentence, plus
/// the accumulated batch totals.
#[derive(Debug)]
pub struct Classification {
    pub verdicts: Vec<NormalizedVerdict>,
    pub totals: BatchTotals,
}

/// An ensemble of exactly three sentiment engines.
///
/// Engines are injected at construction, so tests can substitute stubs
/// with scripted verdicts for any of the three seats.
pub struct Ensemble {
    analyzers: [Box<dyn Analyzer>; 3],
}

impl Ensemble {
    pub fn new(first: Box<dyn Analyzer>, second: Box<dyn Analyzer>, third: Box<dyn Analyzer>) -> Self {
        Self {
            analyzers: [first, second, third],
        }
    }

    /// The reference trio: valence lexicon, pattern lexicon, naive Bayes.
    pub fn reference() -> Self {
        Self::new(
            Box::new(LexiconAnalyzer::new()),
            Box::new(PatternAnalyzer::new()),
            Box::new(BayesAnalyzer::new()),
        )
    }

    /// Classify every sentence and reconcile the three votes per sentence.
    pub fn classify(&self, sentences: &[String]) -> Result<Classification> {
        if sentences.is_empty() {
            return Err(QuorumError::EmptyCorpus);
        }

        let [first, second, third] = self.run_engines(sentences)?;

        let mut verdicts = Vec::with_capacity(sentences.len());
        let mut totals = BatchTotals::default();
        for ((a, b), c) in first.into_iter().zip(second).zip(third) {
            let normalized = aggregate(&[a, b, c])?;
            totals.record(&normalized);
            verdicts.push(normalized);
        }

        info!(
            sentences = sentences.len(),
            positive = totals.positive,
            negative = totals.negative,
            neutral = totals.neutral,
            "Classified corpus"
        );

        Ok(Classification { verdicts, totals })
    }

    /// Build the keyword report: stem the requested keywords, index their
    /// matching sentences, and summarize every keyword with at least one
    /// sample. Keywords appear in the results in request order.
    pub fn keyword_report(&self, sentences: &[String], keywords: &[String]) -> Result<KeywordReport> {
        let stemmer = KeywordStemmer::new();
        let stems = stemmer.stem_keywords(keywords);
        if stems.is_empty() {
            return Err(QuorumError::InvalidInput(
                "no usable keywords after stemming".to_string(),
            ));
        }

        let index = KeywordIndex::build(sentences, &stems);

        let mut results = Vec::new();
        for stem in &stems {
            let samples = index.samples(stem);
            if samples.is_empty() {
                debug!(keyword = %stem, "No matching sentences, skipping");
                continue;
            }
            results.push(self.summarize_keyword(stem, samples)?);
        }

        Ok(KeywordReport {
            results,
            counts: index.counts().clone(),
        })
    }

    /// Summarize one keyword over its sampled sentences.
    ///
    /// Unlike `classify`, this does not reduce each sentence to a single
    /// verdict: it sums raw vote counts across the whole sample, so the
    /// prominence is a vote-share metric, not a sentence-share one.
    pub fn summarize_keyword(&self, keyword: &str, sentences: &[String]) -> Result<KeywordResult> {
        if sentences.is_empty() {
            return Err(QuorumError::InvalidInput(format!(
                "keyword `{keyword}` has no sampled sentences to summarize"
            )));
        }

        let [first, second, third] = self.run_engines(sentences)?;

        let mut positive_votes = 0usize;
        let mut total_votes = 0usize;
        let mut confidence_sum = 0.0_f64;
        for ((a, b), c) in first.iter().zip(&second).zip(&third) {
            let tally = VoteTally::from_labels([a.label, b.label, c.label]);
            tally.validate()?;
            positive_votes += tally.positive as usize;
            total_votes += 3;
            confidence_sum += tally.confidence();
        }

        Ok(KeywordResult {
            keyword: keyword.to_string(),
            sentences: sentences.to_vec(),
            prominence: positive_votes as f64 / total_votes as f64,
            average_confidence: confidence_sum / sentences.len() as f64,
        })
    }

    /// Run all three engines over the batch, in parallel, and validate that
    /// each returned one verdict per input text.
    fn run_engines(&self, sentences: &[String]) -> Result<[Vec<SentimentVerdict>; 3]> {
        let [a, b, c] = &self.analyzers;

        let (first, second, third) = thread::scope(|scope| {
            let first = scope.spawn(|| a.analyze_batch(sentences));
            let second = scope.spawn(|| b.analyze_batch(sentences));
            // The third engine runs on the calling thread
            let third = c.analyze_batch(sentences);
            (
                join_engine(first, a.name()),
                join_engine(second, b.name()),
                third,
            )
        });

        let verdicts = [first?, second?, third?];
        for (engine, batch) in self.analyzers.iter().zip(&verdicts) {
            if batch.len() != sentences.len() {
                return Err(QuorumError::Classifier {
                    engine: engine.name(),
                    reason: format!(
                        "returned {} verdicts for {} texts",
                        batch.len(),
                        sentences.len()
                    ),
                });
            }
        }
        Ok(verdicts)
    }
}

fn join_engine<'a>(
    handle: ScopedJoinHandle<'a, Result<Vec<SentimentVerdict>>>,
    engine: &'static str,
) -> Result<Vec<SentimentVerdict>> {
    handle.join().map_err(|_| QuorumError::Classifier {
        engine,
        reason: "panicked during batch analysis".to_string(),
    })?
}
