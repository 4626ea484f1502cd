//! Categorical normalization.
//!
//! Every categorical column maps the `"na"` sentinel to null, except
//! `transmission`, which maps the literal `"0"` to `"Other"` and keeps
//! everything else as-is.

use polars::prelude::*;
use tracing::warn;

use crate::error::{Result, TransformError};
use crate::numeric::MISSING_SENTINEL;
use crate::roles::ColumnRoles;

/// Column with the alternate sentinel policy.
pub const TRANSMISSION_COLUMN: &str = "transmission";

/// Replacement label for the transmission zero placeholder.
pub const OTHER_LABEL: &str = "Other";

const ZERO_SENTINEL: &str = "0";

/// Normalizes the categorical columns in place.
///
/// A failure in one column is collected and the remaining columns are
/// still processed.
pub fn normalize_categorical_columns(
    df: &mut DataFrame,
    roles: &ColumnRoles,
) -> Vec<TransformError> {
    let mut errors = Vec::new();
    for name in &roles.categorical {
        if let Err(error) = normalize_categorical_column(df, name) {
            warn!(column = %name, %error, "categorical normalization failed");
            errors.push(error);
        }
    }
    errors
}

fn normalize_categorical_column(df: &mut DataFrame, name: &str) -> Result<()> {
    let replaced: StringChunked = {
        let values = df.column(name)?.as_materialized_series().str()?;
        if name == TRANSMISSION_COLUMN {
            values
                .iter()
                .map(|value| {
                    value.map(|value| {
                        if value == ZERO_SENTINEL {
                            OTHER_LABEL.to_string()
                        } else {
                            value.to_string()
                        }
                    })
                })
                .collect()
        } else {
            values
                .iter()
                .map(|value| {
                    value.and_then(|value| {
                        if value == MISSING_SENTINEL {
                            None
                        } else {
                            Some(value.to_string())
                        }
                    })
                })
                .collect()
        }
    };
    df.with_column(replaced.with_name(name.into()).into_series())?;
    Ok(())
}
