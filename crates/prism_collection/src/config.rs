//! Collection store configuration (`[collection]` table of `prism.toml`)

use std::path::Path;

use prism_core::{from_toml_file, from_toml_str, ConfigError};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CollectionConfig {
    /// Storage key holding the JSON item array
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "prism-collection".to_string()
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl CollectionConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        from_toml_str(src)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        from_toml_file(path)
    }
}
