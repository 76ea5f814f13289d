// Quorum: ensemble sentiment analysis with majority-vote reconciliation.
//
// This is the library root. Each module corresponds to a stage of the
// analysis pipeline: load a corpus, score every sentence with three
// independent classifiers, reconcile their votes into one normalized
// verdict, and optionally index stemmed keywords for per-keyword reports.

pub mod analyzers;
pub mod config;
pub mod corpus;
pub mod ensemble;
pub mod error;
pub mod keywords;
pub mod pipeline;
pub mod report;

pub use error::{QuorumError, Result};
