//! Deterministic train/test partitioning for cleaned listing data.
//!
//! Unlike the cleaning stages, everything here is fail-fast: a bad
//! split or bad configuration corrupts everything downstream, so errors
//! propagate to the caller instead of degrading.

pub mod config;
pub mod error;
pub mod partition;

pub use config::{SplitParams, load_split_params};
pub use error::{ConfigError, SplitError};
pub use partition::train_test_split;
