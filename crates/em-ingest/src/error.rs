//! Error types for roster ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a roster.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Roster file not found.
    #[error("roster file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the roster file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content (bad quoting, invalid UTF-8, ...).
    #[error("failed to parse CSV {path} at line {line}: {source}")]
    CsvParse {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// The file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/event_attendees.csv"),
        };
        assert_eq!(
            err.to_string(),
            "roster file not found: /path/to/event_attendees.csv"
        );
    }
}
