//! TOML configuration loading

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}

/// Parse a config value from TOML source.
pub fn from_toml_str<T: DeserializeOwned>(src: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(src)?)
}

/// Load and parse a config value from a `.toml` file on disk.
pub fn from_toml_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let src = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_toml_str(&src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        #[serde(default)]
        retries: u32,
    }

    #[test]
    fn parses_with_defaults() {
        let sample: Sample = from_toml_str("name = \"prism\"").unwrap();
        assert_eq!(
            sample,
            Sample {
                name: "prism".to_string(),
                retries: 0
            }
        );
    }

    #[test]
    fn parse_errors_are_reported() {
        let err = from_toml_str::<Sample>("name = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = from_toml_file::<Sample>("/definitely/not/here/prism.toml").unwrap_err();
        match err {
            ConfigError::Read { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here/prism.toml"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
