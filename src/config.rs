use std::{fs, path::{Path, PathBuf}};
use serde::{Serialize, Deserialize};
use toml;
use anyhow::{self, Context};

use crate::backend::json_store::DEFAULT_KEY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// File holding the key-value store.
    pub path: PathBuf,
    /// Key the entry array is stored under.
    pub key: String
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig { path: PathBuf::from("expenses.json"), key: DEFAULT_KEY.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency: String
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { currency: "₹".to_owned() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub display: DisplayConfig
}

impl AppConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        return AppConfig::parse(&file_content);
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str(content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }

    /// Reads `filepath` when given, otherwise falls back to the defaults.
    pub fn load(filepath: Option<&Path>) -> anyhow::Result<Self> {
        match filepath {
            Some(path) => AppConfig::read(path),
            None => Ok(AppConfig::default())
        }
    }
}
