// Keyword indexing — stemmed token matching over the corpus.

pub mod stem;
pub mod index;
pub mod extract;

pub use index::{KeywordIndex, SAMPLE_CAP};
pub use stem::KeywordStemmer;
