//! Error types for split configuration and partitioning.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading split configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Parameters file not found.
    #[error("parameters file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read the parameters file.
    #[error("failed to read parameters file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the parameters file as YAML.
    #[error("failed to parse parameters file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Errors raised while partitioning a dataset.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The dataset has no rows to assign.
    #[error("cannot split an empty dataset")]
    EmptyDataset,

    /// The test fraction is outside the open interval (0, 1).
    #[error("test fraction must lie in (0, 1), got {value}")]
    InvalidFraction { value: f64 },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for SplitError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}
