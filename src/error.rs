use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, QuorumError>;

#[derive(Debug, Error)]
pub enum QuorumError {
    #[error("unsupported corpus format: {0} (expected .csv or .xlsx)")]
    UnsupportedFormat(String),

    #[error("corpus has no `{0}` column")]
    MissingColumn(String),

    #[error("corpus contains no usable sentences")]
    EmptyCorpus,

    #[error("vote tally {positive}-{negative}-{neutral} does not sum to 3")]
    InvalidVoteTally {
        positive: u8,
        negative: u8,
        neutral: u8,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("classifier `{engine}` failed: {reason}")]
    Classifier { engine: &'static str, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX parse error: {0}")]
    Xlsx(#[from] calamine::XlsxError),
}
