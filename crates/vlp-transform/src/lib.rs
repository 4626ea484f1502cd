//! Cleaning stages for raw vehicle listing data.
//!
//! The cleaning pipeline runs three stages over one `DataFrame` in
//! place: numeric normalization (currency-decorated text to floats),
//! column role classification, and categorical normalization. Every
//! stage is best-effort: a failure in one column is collected and the
//! remaining columns are still processed, so a partially cleaned
//! dataset is always returned to the caller.

use polars::prelude::DataFrame;
use tracing::info;

pub mod categorical;
pub mod error;
pub mod numeric;
pub mod roles;

pub use categorical::normalize_categorical_columns;
pub use error::TransformError;
pub use numeric::{NumericReport, normalize_numeric_columns};
pub use roles::{ColumnRoles, classify};

/// Outcome of the composed cleaning pipeline.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether the leftover index column was present and removed.
    pub index_dropped: bool,
    /// Column roles realized after numeric normalization.
    pub roles: ColumnRoles,
    /// Per-column failures; cleaning keeps going past each one.
    pub errors: Vec<TransformError>,
}

/// Runs the full cleaning sequence over a dataset in place.
///
/// Stages run in order: numeric normalization (including the index
/// artifact drop), role classification, categorical normalization.
/// Row count is never changed; only columns and values are transformed.
pub fn clean_listing_data(df: &mut DataFrame) -> CleanReport {
    let numeric = normalize_numeric_columns(df);
    let roles = classify(df);
    let categorical_errors = normalize_categorical_columns(df, &roles);

    let mut errors = numeric.errors;
    errors.extend(categorical_errors);
    info!(
        rows = df.height(),
        columns = df.width(),
        numeric_columns = roles.numeric.len(),
        categorical_columns = roles.categorical.len(),
        error_count = errors.len(),
        "cleaning complete"
    );
    CleanReport {
        index_dropped: numeric.index_dropped,
        roles,
        errors,
    }
}
