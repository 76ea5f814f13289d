// Corpus loading — tabular files exposing a text column.
//
// Two formats are recognized by extension: .csv and .xlsx. Rows with a
// missing or blank text cell are dropped before analysis.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use tracing::info;

use crate::error::{QuorumError, Result};

/// Load the text column from a tabular corpus file.
///
/// Dispatches on the file extension; anything other than `.csv` or `.xlsx`
/// is unsupported. Errors if the column is missing or no usable rows remain.
pub fn load(path: &Path, column: &str) -> Result<Vec<String>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let sentences = match extension.as_str() {
        "csv" => load_csv(path, column)?,
        "xlsx" => load_xlsx(path, column)?,
        _ => return Err(QuorumError::UnsupportedFormat(path.display().to_string())),
    };

    if sentences.is_empty() {
        return Err(QuorumError::EmptyCorpus);
    }

    info!(
        rows = sentences.len(),
        file = %path.display(),
        "Loaded corpus"
    );
    Ok(sentences)
}

fn load_csv(path: &Path, column: &str) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?;
    let text_idx = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| QuorumError::MissingColumn(column.to_string()))?;

    let mut sentences = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(text) = record.get(text_idx) {
            let text = text.trim();
            if !text.is_empty() {
                sentences.push(text.to_string());
            }
        }
    }
    Ok(sentences)
}

fn load_xlsx(path: &Path, column: &str) -> Result<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| QuorumError::InvalidInput("workbook has no worksheets".to_string()))??;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| QuorumError::MissingColumn(column.to_string()))?;
    let text_idx = header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s == column))
        .ok_or_else(|| QuorumError::MissingColumn(column.to_string()))?;

    let mut sentences = Vec::new();
    for row in rows {
        let Some(cell) = row.get(text_idx) else {
            continue;
        };
        let text = match cell {
            Data::String(s) => s.trim().to_string(),
            Data::Empty => continue,
            other => other.to_string(),
        };
        if !text.is_empty() {
            sentences.push(text);
        }
    }
    Ok(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("quorum-corpus-{name}-{}.csv", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_text_column_and_drops_blanks() {
        let path = temp_csv(
            "basic",
            "Id,Text\n1,Great phone\n2,\n3,  \n4,Battery died fast\n",
        );
        let sentences = load(&path, "Text").unwrap();
        assert_eq!(sentences, vec!["Great phone", "Battery died fast"]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_column_errors() {
        let path = temp_csv("nocol", "Id,Body\n1,hello\n");
        let err = load(&path, "Text").unwrap_err();
        assert!(matches!(err, QuorumError::MissingColumn(c) if c == "Text"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn all_blank_rows_is_empty_corpus() {
        let path = temp_csv("blank", "Text\n\n   \n");
        assert!(matches!(load(&path, "Text"), Err(QuorumError::EmptyCorpus)));
        std::fs::remove_file(path).ok();
    }

    fn fixture(name: &str) -> std::path::PathBuf {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    #[test]
    fn xlsx_loads_text_column_and_drops_blanks() {
        // First worksheet, header lookup; one row has no text cell at all
        // and one holds only whitespace — both are dropped.
        let sentences = load(&fixture("corpus.xlsx"), "Text").unwrap();
        assert_eq!(sentences, vec!["Great phone and battery", "Terrible screen"]);
    }

    #[test]
    fn xlsx_missing_column_errors() {
        let err = load(&fixture("no_text_column.xlsx"), "Text").unwrap_err();
        assert!(matches!(err, QuorumError::MissingColumn(c) if c == "Text"));
    }

    #[test]
    fn unsupported_extension_errors() {
        let err = load(Path::new("corpus.json"), "Text").unwrap_err();
        assert!(matches!(err, QuorumError::UnsupportedFormat(_)));
    }

    #[test]
    fn extensionless_path_errors() {
        let err = load(Path::new("corpus"), "Text").unwrap_err();
        assert!(matches!(err, QuorumError::UnsupportedFormat(_)));
    }
}
