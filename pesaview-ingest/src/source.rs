//! Locating and fetching the raw CSV: local files or HTTP(S) URLs.

use std::fmt;
use std::path::PathBuf;

use crate::error::{LoadError, Result};
use crate::parser::parse_transactions;
use crate::types::Loaded;

/// Where the CSV export lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    File(PathBuf),
    Url(String),
}

impl RecordSource {
    /// `http://` and `https://` locations are URLs; anything else is a path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            RecordSource::Url(trimmed.to_string())
        } else {
            RecordSource::File(PathBuf::from(trimmed))
        }
    }

    fn unavailable(&self, reason: impl fmt::Display) -> LoadError {
        LoadError::SourceUnavailable {
            source_desc: self.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Read the raw CSV text.
    pub async fn fetch(&self) -> Result<String> {
        match self {
            RecordSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| self.unavailable(e)),
            RecordSource::Url(url) => {
                let resp = reqwest::get(url).await.map_err(|e| self.unavailable(e))?;
                let resp = resp.error_for_status().map_err(|e| self.unavailable(e))?;
                resp.text().await.map_err(|e| self.unavailable(e))
            }
        }
    }
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSource::File(path) => write!(f, "{}", path.display()),
            RecordSource::Url(url) => f.write_str(url),
        }
    }
}

/// Fetch and parse a full snapshot of transactions.
pub async fn load_transactions(source: &RecordSource) -> Result<Loaded> {
    tracing::debug!(%source, "fetching transactions");
    let text = source.fetch().await?;
    let loaded = parse_transactions(text.as_bytes())?;
    tracing::info!(
        %source,
        records = loaded.records.len(),
        skipped = loaded.report.skipped_total(),
        "loaded transactions"
    );
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_location() {
        assert_eq!(
            RecordSource::parse("https://example.com/data.csv"),
            RecordSource::Url("https://example.com/data.csv".to_string())
        );
        assert_eq!(
            RecordSource::parse("data/cleaned.csv"),
            RecordSource::File(PathBuf::from("data/cleaned.csv"))
        );
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "date,direction,clean_amount,description,raw,category").unwrap();
        writeln!(file, "2024-06-01,IN,1000,Salary,r,Salary").unwrap();
        writeln!(file, "2024-06-02,OUT,250,Lunch,r,Food").unwrap();

        let source = RecordSource::File(file.path().to_path_buf());
        let loaded = load_transactions(&source).await.unwrap();
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.records[1].category, "Food");
    }

    #[tokio::test]
    async fn test_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = RecordSource::File(dir.path().join("nope.csv"));
        let err = load_transactions(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }
}
