use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Result, ScreenError};

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
}

/// Display limits for `summary.md`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of ranked theories listed
    pub top_theories: usize,
    /// Number of example records listed
    pub sample_records: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_theories: 20,
            sample_records: 10,
        }
    }
}

impl Config {
    /// Loads a TOML config file. Keys that are not present keep their defaults.
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            ScreenError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ScreenError::Config(format!("Invalid config: {}", e)))
    }

    /// Uses the file when one was given, defaults otherwise
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
