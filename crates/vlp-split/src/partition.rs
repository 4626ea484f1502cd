//! Deterministic train/test partitioning.

use polars::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::error::SplitError;

/// Splits a dataset into disjoint train and test sets.
///
/// Row indices are shuffled by a uniform permutation seeded with
/// `random_state`; the first `round(test_size * n)` permuted indices
/// form the test set and the remainder the train set. Rounding is
/// `f64::round` (half away from zero). The same `(data, test_size,
/// random_state)` always reproduces the same partition.
///
/// `test_size` must lie in the open interval (0, 1) and the dataset
/// must not be empty; both violations are hard errors because a bad
/// split corrupts everything downstream.
pub fn train_test_split(
    df: &DataFrame,
    test_size: f64,
    random_state: u64,
) -> Result<(DataFrame, DataFrame), SplitError> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(SplitError::InvalidFraction { value: test_size });
    }
    let height = df.height();
    if height == 0 {
        return Err(SplitError::EmptyDataset);
    }

    let mut indices: Vec<IdxSize> = (0..height as IdxSize).collect();
    let mut rng = StdRng::seed_from_u64(random_state);
    indices.shuffle(&mut rng);

    let test_len = ((test_size * height as f64).round() as usize).min(height);
    let (test_indices, train_indices) = indices.split_at(test_len);

    let test = df.take(&IdxCa::from_vec("idx".into(), test_indices.to_vec()))?;
    let train = df.take(&IdxCa::from_vec("idx".into(), train_indices.to_vec()))?;

    info!(
        rows = height,
        train_rows = train.height(),
        test_rows = test.height(),
        test_size,
        random_state,
        "dataset partitioned"
    );
    Ok((train, test))
}
