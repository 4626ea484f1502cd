//! Split parameters loaded from a YAML configuration file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::ConfigError;

/// Parameters controlling the train/test partition.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SplitParams {
    /// Fraction of rows assigned to the test set.
    pub test_size: f64,
    /// Seed for the row permutation.
    pub random_state: u64,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            test_size: 0.2,
            random_state: 42,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ParamsFile {
    #[serde(rename = "Data_Preparation", default)]
    data_preparation: SplitParams,
}

/// Reads split parameters from a YAML file.
///
/// The parameters live under the `Data_Preparation` section; a missing
/// section or missing keys fall back to the defaults (`test_size` 0.2,
/// `random_state` 42). A missing or unparseable file is an error, which
/// is fatal to the split run.
pub fn load_split_params(path: &Path) -> Result<SplitParams, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ParamsFile = serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let params = parsed.data_preparation;
    info!(
        test_size = params.test_size,
        random_state = params.random_state,
        "split parameters loaded"
    );
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn params_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn reads_section_values() {
        let file = params_file("Data_Preparation:\n  test_size: 0.3\n  random_state: 7\n");
        let params = load_split_params(file.path()).unwrap();
        assert_eq!(params.test_size, 0.3);
        assert_eq!(params.random_state, 7);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let file = params_file("Data_Preparation:\n  test_size: 0.25\n");
        let params = load_split_params(file.path()).unwrap();
        assert_eq!(params.test_size, 0.25);
        assert_eq!(params.random_state, 42);
    }

    #[test]
    fn missing_section_falls_back_to_defaults() {
        let file = params_file("Other_Section:\n  foo: 1\n");
        let params = load_split_params(file.path()).unwrap();
        assert_eq!(params, SplitParams::default());
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_split_params(Path::new("/no/such/params.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let file = params_file("Data_Preparation: [not: a: mapping\n");
        let err = load_split_params(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
