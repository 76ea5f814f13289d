// Sentiment classifiers — trait-based abstraction for swappable engines.
//
// The Analyzer trait defines the interface. Three reference engines
// implement it: a valence-lexicon scorer, a pattern-lexicon scorer, and a
// multinomial naive-Bayes scorer. Each owns only its own tables, so new
// engines can be swapped in without touching the rest of the pipeline.

pub mod traits;
pub mod lexicon;
pub mod pattern;
pub mod bayes;

pub use traits::{Analyzer, Label, SentimentVerdict};
