// Colored terminal output for batch and keyword reports.
//
// This module handles all terminal-specific formatting. The main.rs
// display paths delegate here.

use colored::Colorize;

use super::{BatchReport, KeywordReport};

/// Display the batch-level sentiment totals.
pub fn display_batch_report(report: &BatchReport) {
    let total = report.total_positive + report.total_negative + report.total_neutral;

    println!(
        "\n{}",
        format!("=== Sentiment Report ({total} sentences) ===").bold()
    );
    println!();
    println!(
        "  {} {:<10} {}",
        "+".green().bold(),
        "positive",
        report.total_positive
    );
    println!(
        "  {} {:<10} {}",
        "-".red().bold(),
        "negative",
        report.total_negative
    );
    println!(
        "  {} {:<10} {}",
        "~".yellow(),
        "neutral",
        report.total_neutral
    );
    println!();
    println!(
        "  Average confidence: {}%",
        format!("{:.2}", report.average_confidence_percent()).bold()
    );
}

/// Display per-keyword results and the raw occurrence counters.
pub fn display_keyword_report(report: &KeywordReport) {
    if report.results.is_empty() {
        println!("\nNo keywords matched any sentence in the corpus.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Keyword Report ({} keywords) ===", report.results.len()).bold()
    );

    for result in &report.results {
        println!("\n  {}", result.keyword.bold());
        println!(
            "    prominence: {}  confidence: {}  occurrences: {}",
            format!("{:.2}", result.prominence).green(),
            format!("{:.2}", result.average_confidence),
            report.counts.get(&result.keyword).copied().unwrap_or(0),
        );
        for sentence in &result.sentences {
            println!("    - {}", truncate_chars(sentence, 120).dimmed());
        }
    }

    // Counters for every requested keyword, including zero-match ones.
    // Sorted for stable output; HashMap iteration order is arbitrary.
    let mut counts: Vec<(&String, &usize)> = report.counts.iter().collect();
    counts.sort_by(|a, b| a.0.cmp(b.0));

    println!("\n  {}", "Occurrence counts".bold());
    for (keyword, count) in counts {
        println!("    {keyword:<20} {count}");
    }
}

/// Truncate a string to at most `max_chars` characters, appending "..." if
/// truncated. Respects UTF-8 character boundaries, unlike byte slicing.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
