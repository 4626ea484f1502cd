//! Error types for listing data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading listing data.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to parse CSV content with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display_includes_path() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/raw/master_data.csv"),
        };
        assert_eq!(
            err.to_string(),
            "CSV file not found: /data/raw/master_data.csv"
        );
    }

    #[test]
    fn polars_errors_map_to_dataframe() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("price".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
