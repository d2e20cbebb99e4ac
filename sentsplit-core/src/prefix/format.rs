//! On-disk formats for prefix data
//!
//! Two formats are understood. The TOML format carries metadata and two
//! prefix lists:
//!
//! ```toml
//! [metadata]
//! code = "en"
//! name = "English"
//!
//! [prefixes]
//! always = ["Mr", "Mrs"]
//! numeric_only = ["No"]
//! ```
//!
//! The list format has one prefix per line, `#` comments, and a
//! `#NUMERIC_ONLY#` marker after the prefix for numeric-only entries.

use super::table::{BreakClass, PrefixTable};
use crate::error::{Result, SplitError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static NUMERIC_ONLY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s+#NUMERIC_ONLY#").expect("numeric-only marker pattern is valid")
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixConfig {
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub prefixes: PrefixLists,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrefixLists {
    #[serde(default)]
    pub always: Vec<String>,
    #[serde(default)]
    pub numeric_only: Vec<String>,
}

impl PrefixConfig {
    /// Parse a TOML prefix document
    pub fn from_toml_str(language: &str, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SplitError::InvalidPrefixData {
            language: language.to_string(),
            reason: e.to_string(),
        })
    }

    /// Build the table; numeric-only entries are applied after the
    /// always-list so they win on duplicates
    pub fn into_table(self) -> PrefixTable {
        let mut table = PrefixTable::new(self.metadata.code);
        for prefix in self.prefixes.always {
            insert_trimmed(&mut table, &prefix, BreakClass::AlwaysNonBreaking);
        }
        for prefix in self.prefixes.numeric_only {
            insert_trimmed(&mut table, &prefix, BreakClass::NumericOnlyNonBreaking);
        }
        table
    }
}

fn insert_trimmed(table: &mut PrefixTable, prefix: &str, class: BreakClass) {
    let prefix = prefix.trim();
    if !prefix.is_empty() {
        table.insert(prefix, class);
    }
}

/// Parse the line-oriented prefix list format
pub fn parse_prefix_list(language: &str, content: &str) -> PrefixTable {
    let mut table = PrefixTable::new(language);

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match NUMERIC_ONLY_LINE.captures(line) {
            Some(caps) => insert_trimmed(&mut table, &caps[1], BreakClass::NumericOnlyNonBreaking),
            None => insert_trimmed(&mut table, line, BreakClass::AlwaysNonBreaking),
        }
    }

    table
}
