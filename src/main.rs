use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use quorum::config::Config;
use quorum::pipeline::Ensemble;
use quorum::report::{terminal, BatchReport};
use quorum::{corpus, keywords};

/// Quorum: ensemble sentiment analysis for free-text corpora.
///
/// Scores every record with three independent classifiers, reconciles
/// their votes into one normalized verdict per record, and reports
/// keyword-level sentiment on request.
#[derive(Parser)]
#[command(name = "quorum", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a corpus and print the batch-level sentiment report
    Analyze {
        /// Corpus file (.csv or .xlsx) with a text column
        file: PathBuf,

        /// Emit the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Report per-keyword sentiment and prominence across the corpus
    Keywords {
        /// Corpus file (.csv or .xlsx) with a text column
        file: PathBuf,

        /// Keyword to report on (repeatable); auto-extracted when omitted
        #[arg(long = "keyword")]
        keywords: Vec<String>,

        /// How many keywords to auto-extract when none are given
        #[arg(long)]
        top: Option<usize>,

        /// Emit the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quorum=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { file, json } => {
            let sentences = corpus::load(&file, &config.text_column)?;
            let ensemble = Ensemble::reference();
            let classification = ensemble.classify(&sentences)?;
            let report = BatchReport::from_totals(&classification.totals)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_batch_report(&report);
            }
        }

        Commands::Keywords {
            file,
            keywords: requested,
            top,
            json,
        } => {
            let sentences = corpus::load(&file, &config.text_column)?;
            let ensemble = Ensemble::reference();

            let requested = if requested.is_empty() {
                let top = top.unwrap_or(config.top_keywords);
                info!(top, "No keywords given, extracting from corpus");
                keywords::extract::extract_keywords(&sentences, top)?
            } else {
                requested
            };

            let classification = ensemble.classify(&sentences)?;
            let batch = BatchReport::from_totals(&classification.totals)?;
            let report = ensemble.keyword_report(&sentences, &requested)?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "batch": batch,
                        "keywords": report,
                    }))?
                );
            } else {
                terminal::display_batch_report(&batch);
                terminal::display_keyword_report(&report);
            }
        }
    }

    Ok(())
}
