// Ensemble reconciliation — vote tallying and the majority-with-fallback
// policy that turns three independent verdicts into one normalized one.

pub mod vote;
pub mod aggregate;

pub use aggregate::{aggregate, BatchTotals};
pub use vote::{NormalizedVerdict, VoteTally};
