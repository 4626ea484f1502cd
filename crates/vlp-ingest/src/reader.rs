//! CSV loading for listing data.

use std::path::Path;

use polars::prelude::*;
use tracing::info;

use crate::error::{IngestError, Result};

/// Reads a listing CSV file into a Polars `DataFrame`.
///
/// The first row is treated as the header and column types are inferred
/// from a sample of the data. Sentinel strings such as `"na"` are kept
/// as text; coercing them is the cleaning stage's job.
///
/// Returns [`IngestError::FileNotFound`] when the path does not exist
/// and [`IngestError::CsvParse`] when the content cannot be parsed.
pub fn read_listing_csv(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "listing data loaded"
    );
    Ok(df)
}
