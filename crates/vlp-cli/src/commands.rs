//! Command entry points for the clean and split runs.
//!
//! The two runs share the same loading and saving collaborators but
//! differ in error posture: cleaning degrades to best-effort output on
//! every failure, splitting propagates the first failure to the caller,
//! which halts the process. Neither function terminates the process
//! itself; the exit-code decision belongs to `main`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::error;

use vlp_ingest::read_listing_csv;
use vlp_output::write_csv;
use vlp_split::{load_split_params, train_test_split};
use vlp_transform::clean_listing_data;

use crate::cli::{CleanArgs, SplitArgs};

/// File name of the cleaned dataset.
pub const CLEANED_FILE: &str = "cleaned_data.csv";

/// File name of the train partition.
pub const TRAIN_FILE: &str = "train.csv";

/// File name of the test partition.
pub const TEST_FILE: &str = "test.csv";

/// Outcome of a cleaning run. The run itself never fails; everything
/// that went wrong is collected here.
#[derive(Debug, Default)]
pub struct CleanSummary {
    pub rows: usize,
    pub columns: usize,
    pub numeric_columns: usize,
    pub categorical_columns: usize,
    pub index_dropped: bool,
    pub output: Option<PathBuf>,
    pub errors: Vec<String>,
}

/// Outcome of a successful split run.
#[derive(Debug)]
pub struct SplitSummary {
    pub rows: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    pub test_size: f64,
    pub random_state: u64,
    pub train_path: PathBuf,
    pub test_path: PathBuf,
}

/// Runs the cleaning pipeline end to end.
///
/// Load, normalize, and save failures all degrade: they are logged,
/// collected into the summary, and the run carries on with whatever
/// data it still has. A partially cleaned dataset is still useful.
pub fn run_clean(args: &CleanArgs) -> CleanSummary {
    let mut summary = CleanSummary::default();

    let mut df = match read_listing_csv(&args.input) {
        Ok(df) => df,
        Err(err) => {
            error!(path = %args.input.display(), error = %err, "cannot load raw listing data");
            summary.errors.push(err.to_string());
            return summary;
        }
    };

    let report = clean_listing_data(&mut df);
    summary.rows = df.height();
    summary.columns = df.width();
    summary.numeric_columns = report.roles.numeric.len();
    summary.categorical_columns = report.roles.categorical.len();
    summary.index_dropped = report.index_dropped;
    summary
        .errors
        .extend(report.errors.iter().map(ToString::to_string));

    match write_csv(&args.output_dir, CLEANED_FILE, &mut df) {
        Ok(path) => summary.output = Some(path),
        Err(err) => {
            error!(error = %err, "cannot save cleaned data");
            summary.errors.push(err.to_string());
        }
    }

    summary
}

/// Runs the split pipeline end to end.
///
/// Every failure is fatal: a partially split or partially persisted
/// dataset corrupts everything downstream, so the first error
/// propagates to the caller.
pub fn run_split(args: &SplitArgs) -> Result<SplitSummary> {
    let df = read_listing_csv(&args.input)
        .with_context(|| format!("load cleaned data from {}", args.input.display()))?;

    let params = load_split_params(&args.params)
        .with_context(|| format!("read parameters from {}", args.params.display()))?;

    let (mut train, mut test) = train_test_split(&df, params.test_size, params.random_state)
        .context("split cleaned data")?;

    let train_path =
        write_csv(&args.output_dir, TRAIN_FILE, &mut train).context("save train split")?;
    let test_path = write_csv(&args.output_dir, TEST_FILE, &mut test).context("save test split")?;

    Ok(SplitSummary {
        rows: df.height(),
        train_rows: train.height(),
        test_rows: test.height(),
        test_size: params.test_size,
        random_state: params.random_state,
        train_path,
        test_path,
    })
}
