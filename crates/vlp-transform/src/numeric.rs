//! Numeric normalization for listing columns.
//!
//! `price` and `mileage` arrive as currency-decorated text (`"$12,345"`)
//! with a literal `"na"` sentinel; `date` arrives as plain text or
//! numbers with the same sentinel. All three are coerced to `Float64`
//! with the sentinel mapped to null. Sentinel substitution happens
//! before decoration stripping, so a decorated sentinel such as `"$na"`
//! is not recognized and fails the parse step instead.

use polars::prelude::*;
use tracing::{info, warn};

use vlp_ingest::parse_f64;

use crate::error::{Result, TransformError};

/// Leftover row-index column from a prior export.
pub const INDEX_ARTIFACT: &str = "Unnamed: 0";

/// Literal placeholder for a missing value in the raw data.
pub const MISSING_SENTINEL: &str = "na";

/// Columns stored as currency-decorated text.
pub const CURRENCY_COLUMNS: [&str; 2] = ["price", "mileage"];

/// Column stored as plain text or numbers, no currency decoration.
pub const DATE_COLUMN: &str = "date";

/// Outcome of the numeric normalization stage.
#[derive(Debug, Default)]
pub struct NumericReport {
    /// Whether the leftover index column was present and removed.
    pub index_dropped: bool,
    /// Per-column failures; the stage keeps going past each one.
    pub errors: Vec<TransformError>,
}

/// Drops the leftover index column if present. Returns whether it was
/// dropped. No other column is affected.
pub fn drop_index_column(df: &mut DataFrame) -> bool {
    if df.drop_in_place(INDEX_ARTIFACT).is_ok() {
        info!(column = INDEX_ARTIFACT, "dropped leftover index column");
        true
    } else {
        false
    }
}

/// Normalizes the designated numeric columns in place.
///
/// The index artifact is dropped first (once, dataset-wide), then each
/// designated column is coerced to `Float64`. A failure in one column
/// is collected and the remaining columns are still processed.
pub fn normalize_numeric_columns(df: &mut DataFrame) -> NumericReport {
    let mut report = NumericReport {
        index_dropped: drop_index_column(df),
        ..NumericReport::default()
    };

    if let Err(error) = normalize_column(df, DATE_COLUMN, false) {
        warn!(column = DATE_COLUMN, %error, "numeric normalization failed");
        report.errors.push(error);
    }
    for name in CURRENCY_COLUMNS {
        if let Err(error) = normalize_column(df, name, true) {
            warn!(column = name, %error, "numeric normalization failed");
            report.errors.push(error);
        }
    }
    report
}

/// Coerces one column to `Float64`.
///
/// For textual columns the sentinel substitution and decoration
/// stripping mutate the column in place first; the parse step then
/// replaces it atomically. When any value fails to parse the column is
/// left in its stripped-text state. Already-numeric columns only get
/// widened to the target type.
fn normalize_column(df: &mut DataFrame, name: &str, strip_decoration: bool) -> Result<()> {
    let dtype = df.column(name)?.dtype().clone();
    if dtype != DataType::String {
        if dtype != DataType::Float64 {
            let cast = df.column(name)?.cast(&DataType::Float64)?;
            df.with_column(cast)?;
        }
        return Ok(());
    }

    let stripped: StringChunked = df
        .column(name)?
        .as_materialized_series()
        .str()?
        .iter()
        .map(|value| {
            let value = value?;
            if value == MISSING_SENTINEL {
                return None;
            }
            Some(if strip_decoration {
                value.replace(',', "").replace('$', "")
            } else {
                value.to_string()
            })
        })
        .collect();
    df.with_column(stripped.with_name(name.into()).into_series())?;

    let mut parsed: Vec<Option<f64>> = Vec::with_capacity(df.height());
    for (row, value) in df
        .column(name)?
        .as_materialized_series()
        .str()?
        .iter()
        .enumerate()
    {
        match value {
            None => parsed.push(None),
            Some(text) => match parse_f64(text) {
                Some(number) => parsed.push(Some(number)),
                None => {
                    return Err(TransformError::Unparseable {
                        column: name.to_string(),
                        row,
                        value: text.to_string(),
                    });
                }
            },
        }
    }
    let floats: Float64Chunked = parsed.into_iter().collect();
    df.with_column(floats.with_name(name.into()).into_series())?;
    Ok(())
}
