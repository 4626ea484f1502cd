//! Error types for the cleaning stages.

use thiserror::Error;

/// Errors produced while normalizing listing columns.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A value could not be coerced to a float after sentinel handling.
    #[error("column '{column}' row {row}: cannot parse '{value}' as a number")]
    Unparseable {
        column: String,
        row: usize,
        value: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, TransformError>;
