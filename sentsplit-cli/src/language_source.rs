//! Prefix data source selection for the CLI

use sentsplit_core::PrefixSource;
use std::path::PathBuf;

/// Where the split command loads prefix tables from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Tables compiled into the binary
    BuiltIn,
    /// A directory of `<code>.toml` or `nonbreaking_prefix.<code>` files
    Directory(PathBuf),
}

impl LanguageSource {
    /// Source for an optional `--prefix-dir` value
    pub fn from_prefix_dir(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(path) => LanguageSource::Directory(path),
            None => LanguageSource::BuiltIn,
        }
    }

    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn => "Built-in".to_string(),
            LanguageSource::Directory(path) => format!("Directory: {}", path.display()),
        }
    }

    pub fn to_prefix_source(&self) -> PrefixSource {
        match self {
            LanguageSource::BuiltIn => PrefixSource::Embedded,
            LanguageSource::Directory(path) => PrefixSource::Directory(path.clone()),
        }
    }
}
