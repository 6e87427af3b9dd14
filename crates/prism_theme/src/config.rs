//! Theme provider configuration (`[theme]` table of `prism.toml`)

use std::path::Path;

use prism_core::{from_toml_file, from_toml_str, ConfigError};
use serde::{Deserialize, Serialize};

use crate::registry::ThemeName;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Theme adopted when nothing valid is persisted
    #[serde(default)]
    pub default_theme: ThemeName,
    /// Storage key holding the active theme id
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Root attribute exposing the active theme id
    #[serde(default = "default_data_attribute")]
    pub data_attribute: String,
}

fn default_storage_key() -> String {
    "prism-theme".to_string()
}

fn default_data_attribute() -> String {
    "data-theme".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeName::default(),
            storage_key: default_storage_key(),
            data_attribute: default_data_attribute(),
        }
    }
}

impl ThemeConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        from_toml_str(src)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        from_toml_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(ThemeConfig::from_toml_str("").unwrap(), ThemeConfig::default());
    }

    #[test]
    fn default_theme_is_read_by_id() {
        let config = ThemeConfig::from_toml_str(
            r#"
default_theme = "material"
storage_key = "catalog-theme"
"#,
        )
        .unwrap();
        assert_eq!(config.default_theme, ThemeName::Material);
        assert_eq!(config.storage_key, "catalog-theme");
        assert_eq!(config.data_attribute, "data-theme");
    }

    #[test]
    fn unknown_default_theme_is_a_parse_error() {
        let err = ThemeConfig::from_toml_str("default_theme = \"retro\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
