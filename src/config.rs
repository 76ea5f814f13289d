use std::env;

use crate::error::{QuorumError, Result};

/// Default name of the corpus text column.
pub const DEFAULT_TEXT_COLUMN: &str = "Text";

/// Default number of keywords auto-extracted when none are given.
pub const DEFAULT_TOP_KEYWORDS: usize = 8;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Everything
/// has a default — quorum runs with zero configuration.
#[derive(Debug)]
pub struct Config {
    /// Column holding the free-text records (QUORUM_TEXT_COLUMN).
    pub text_column: String,
    /// How many keywords to auto-extract for `keywords` runs without
    /// explicit --keyword flags (QUORUM_TOP_KEYWORDS).
    pub top_keywords: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let top_keywords = match env::var("QUORUM_TOP_KEYWORDS") {
            Ok(raw) => raw.parse::<usize>().map_err(|_| {
                QuorumError::InvalidInput(format!(
                    "QUORUM_TOP_KEYWORDS must be a number, got `{raw}`"
                ))
            })?,
            Err(_) => DEFAULT_TOP_KEYWORDS,
        };

        Ok(Self {
            text_column: env::var("QUORUM_TEXT_COLUMN")
                .unwrap_or_else(|_| DEFAULT_TEXT_COLUMN.to_string()),
            top_keywords,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test, sequential steps: the QUORUM_* vars are process-global, so
    // splitting these cases would race under the parallel test runner.
    #[test]
    fn load_applies_defaults_and_rejects_bad_numbers() {
        env::remove_var("QUORUM_TEXT_COLUMN");
        env::remove_var("QUORUM_TOP_KEYWORDS");
        let config = Config::load().unwrap();
        assert_eq!(config.text_column, DEFAULT_TEXT_COLUMN);
        assert_eq!(config.top_keywords, DEFAULT_TOP_KEYWORDS);

        env::set_var("QUORUM_TOP_KEYWORDS", "many");
        let err = Config::load().unwrap_err();
        assert!(matches!(err, QuorumError::InvalidInput(_)));

        env::set_var("QUORUM_TOP_KEYWORDS", "12");
        assert_eq!(Config::load().unwrap().top_keywords, 12);
        env::remove_var("QUORUM_TOP_KEYWORDS");
    }
}
