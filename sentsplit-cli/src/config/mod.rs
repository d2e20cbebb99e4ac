//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Split command defaults
    #[serde(default)]
    pub split: SplitConfig,
}

/// Defaults for the split command
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SplitConfig {
    /// Language code used when `--language` is absent
    pub language: String,

    /// Directory of prefix files used when `--prefix-dir` is absent
    pub prefix_dir: Option<PathBuf>,

    /// Output format used when `--format` is absent
    pub format: OutputFormat,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            prefix_dir: None,
            format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
