//! Prefix table loading with English fallback

use super::format::{parse_prefix_list, PrefixConfig};
use super::table::PrefixTable;
use crate::error::{Result, SplitError};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Language used when the requested one has no prefix data
pub const FALLBACK_LANGUAGE: &str = "en";

macro_rules! embed_prefix_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

const EMBEDDED_PREFIXES: &[(&str, &str)] = &[
    embed_prefix_config!("de", "../../configs/prefixes/de.toml"),
    embed_prefix_config!("en", "../../configs/prefixes/en.toml"),
    embed_prefix_config!("es", "../../configs/prefixes/es.toml"),
    embed_prefix_config!("fr", "../../configs/prefixes/fr.toml"),
    embed_prefix_config!("it", "../../configs/prefixes/it.toml"),
    embed_prefix_config!("nl", "../../configs/prefixes/nl.toml"),
    embed_prefix_config!("pt", "../../configs/prefixes/pt.toml"),
    embed_prefix_config!("ru", "../../configs/prefixes/ru.toml"),
];

/// Where prefix data is read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PrefixSource {
    /// Tables compiled into the crate
    #[default]
    Embedded,
    /// A directory holding `<code>.toml` or `nonbreaking_prefix.<code>` files
    Directory(PathBuf),
}

/// Code and display name of an embedded language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: String,
}

/// Load the prefix table for `language`
///
/// Falls back to English with a warning when the language has no data.
/// Fails only when English is missing as well.
pub fn load_prefix_table(language: &str, source: &PrefixSource) -> Result<PrefixTable> {
    let code = language.trim().to_lowercase();

    if let Some(table) = find_table(&code, source)? {
        debug!(
            "Loaded {} non-breaking prefixes for '{}'",
            table.len(),
            table.language()
        );
        return Ok(table);
    }

    if code != FALLBACK_LANGUAGE {
        if let Some(mut table) = find_table(FALLBACK_LANGUAGE, source)? {
            warn!(
                "No known abbreviations for language '{code}', falling back to English"
            );
            table.mark_fallback(&code);
            return Ok(table);
        }
    }

    Err(SplitError::NoPrefixTable { language: code })
}

/// Languages with compiled-in prefix data, sorted by code
pub fn available_languages() -> Vec<LanguageInfo> {
    let mut languages: Vec<LanguageInfo> = EMBEDDED_PREFIXES
        .iter()
        .map(|&(code, content)| LanguageInfo {
            code,
            name: PrefixConfig::from_toml_str(code, content)
                .map(|config| config.metadata.name)
                .unwrap_or_else(|_| code.to_string()),
        })
        .collect();
    languages.sort_by(|a, b| a.code.cmp(b.code));
    languages
}

fn find_table(code: &str, source: &PrefixSource) -> Result<Option<PrefixTable>> {
    match source {
        PrefixSource::Embedded => EMBEDDED_PREFIXES
            .iter()
            .find(|(embedded, _)| *embedded == code)
            .map(|(_, content)| parse_toml_table(code, content))
            .transpose(),
        PrefixSource::Directory(dir) => find_in_directory(code, dir),
    }
}

fn find_in_directory(code: &str, dir: &Path) -> Result<Option<PrefixTable>> {
    let toml_path = dir.join(format!("{code}.toml"));
    if toml_path.is_file() {
        let content = read_file(&toml_path)?;
        return parse_toml_table(code, &content).map(Some);
    }

    let list_path = dir.join(format!("nonbreaking_prefix.{code}"));
    if list_path.is_file() {
        let content = read_file(&list_path)?;
        return Ok(Some(parse_prefix_list(code, &content)));
    }

    Ok(None)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SplitError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_toml_table(code: &str, content: &str) -> Result<PrefixTable> {
    let config = PrefixConfig::from_toml_str(code, content)?;

    if config.metadata.code != code {
        return Err(SplitError::InvalidPrefixData {
            language: code.to_string(),
            reason: format!("metadata code mismatch: got '{}'", config.metadata.code),
        });
    }

    Ok(config.into_table())
}
