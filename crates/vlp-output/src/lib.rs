//! CSV persistence for prepared datasets.

use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::*;
use thiserror::Error;
use tracing::info;

/// Errors raised while persisting a dataset.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Could not create the output directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not create or write the output file.
    #[error("failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Writes a dataset to `<dir>/<file_name>`, creating missing directories.
///
/// An existing file at the same location is overwritten without warning
/// so re-runs are idempotent. Headers are written; no index column is
/// added. Returns the written path.
pub fn write_csv(dir: &Path, file_name: &str, df: &mut DataFrame) -> Result<PathBuf, OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    let mut file = File::create(&path).map_err(|e| OutputError::Write {
        path: path.clone(),
        message: e.to_string(),
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|e| OutputError::Write {
            path: path.clone(),
            message: e.to_string(),
        })?;

    info!(path = %path.display(), rows = df.height(), "dataset saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        let price = Series::new("price".into(), &[100.0f64, 200.0]).into_column();
        let model = Series::new("model".into(), vec!["A4", "Golf"]).into_column();
        DataFrame::new(vec![price, model]).unwrap()
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("interim");

        let mut df = sample_df();
        let path = write_csv(&nested, "train.csv", &mut df).unwrap();

        assert!(path.exists());
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("price,model\n"));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();

        let mut df = sample_df();
        let path = write_csv(dir.path(), "cleaned_data.csv", &mut df).unwrap();
        let first = fs::read_to_string(&path).unwrap();

        let mut df = sample_df();
        write_csv(dir.path(), "cleaned_data.csv", &mut df).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }
}
