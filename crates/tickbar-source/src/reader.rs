//! Async CSV row reading.

use futures::StreamExt;
use std::path::Path;
use thiserror::Error;

/// One raw CSV row as unvalidated string fields.
pub type RawRow = Vec<String>;

/// Errors that can occur while reading a tick CSV file.
///
/// These are transport failures and abort the file; they are distinct from
/// per-row data defects, which travel to the sanitizer as ordinary rows.
#[derive(Error, Debug)]
pub enum SourceError {
    /// I/O error opening or reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV transport error (encoding, unterminated quotes).
    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),
}

impl From<SourceError> for tickbar_types::TickbarError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Io(err) => Self::Io(err),
            SourceError::Csv(err) => Self::Source(err.to_string()),
        }
    }
}

/// Reads all data rows of one CSV file, skipping the header row.
///
/// The reader is flexible: rows with the wrong field count are yielded as-is
/// rather than rejected here, so the sanitizer can count them as malformed.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub async fn read_rows(path: &Path) -> Result<Vec<RawRow>, SourceError> {
    let file = tokio::fs::File::open(path).await?;
    let mut reader = csv_async::AsyncReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .create_reader(file);

    let mut rows = Vec::new();
    let mut records = reader.records();
    while let Some(record) = records.next().await {
        let record = record?;
        rows.push(record.iter().map(ToString::to_string).collect());
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_rows_skips_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ticks.csv");
        std::fs::write(
            &path,
            "timestamp,price,volume\n2024-01-01 00:00:00.000,100.5,10\n2024-01-01 00:00:01.000,101.0,5\n",
        )
        .unwrap();

        let rows = read_rows(&path).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["2024-01-01 00:00:00.000", "100.5", "10"]);
    }

    #[tokio::test]
    async fn test_read_rows_keeps_short_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ticks.csv");
        std::fs::write(
            &path,
            "timestamp,price,volume\n2024-01-01 00:00:00,1.0\nbad,x,y,z\n",
        )
        .unwrap();

        let rows = read_rows(&path).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 4);
    }

    #[tokio::test]
    async fn test_read_rows_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ticks.csv");
        std::fs::write(&path, "timestamp,price,volume\n").unwrap();

        let rows = read_rows(&path).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_read_rows_missing_file() {
        let result = read_rows(Path::new("/nonexistent/ticks.csv")).await;
        assert!(matches!(result, Err(SourceError::Io(_))));
    }

    #[tokio::test]
    async fn test_source_error_converts_to_workspace_error() {
        let err = read_rows(Path::new("/nonexistent/ticks.csv"))
            .await
            .unwrap_err();
        assert!(matches!(
            tickbar_types::TickbarError::from(err),
            tickbar_types::TickbarError::Io(_)
        ));
    }
}
