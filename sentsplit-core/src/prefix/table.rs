//! Non-breaking prefix table

use std::collections::HashMap;
use std::fmt;

/// How a known prefix affects a following period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakClass {
    /// Never break after `prefix.` unless closing punctuation intervenes
    AlwaysNonBreaking,
    /// Do not break after `prefix.` only when the next token starts with digits
    NumericOnlyNonBreaking,
}

impl fmt::Display for BreakClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakClass::AlwaysNonBreaking => write!(f, "always"),
            BreakClass::NumericOnlyNonBreaking => write!(f, "numeric-only"),
        }
    }
}

/// Per-language table of abbreviations that do not end a sentence
///
/// Keys are matched exactly and case-sensitively. The table is built once
/// and then only read, so a single instance can be shared between threads
/// behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable {
    language: String,
    fallback_from: Option<String>,
    entries: HashMap<String, BreakClass>,
}

impl PrefixTable {
    /// Create an empty table for a language
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            fallback_from: None,
            entries: HashMap::new(),
        }
    }

    /// Language code whose data this table holds
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The originally requested language when English was substituted
    pub fn fallback_from(&self) -> Option<&str> {
        self.fallback_from.as_deref()
    }

    pub(crate) fn mark_fallback(&mut self, requested: &str) {
        self.fallback_from = Some(requested.to_string());
    }

    /// Add or replace an entry; the last insert for a key wins
    pub fn insert(&mut self, prefix: impl Into<String>, class: BreakClass) {
        self.entries.insert(prefix.into(), class);
    }

    /// Break class of `prefix`, if it is a known non-breaking prefix
    pub fn lookup(&self, prefix: &str) -> Option<BreakClass> {
        self.entries.get(prefix).copied()
    }

    /// Number of prefixes in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no prefixes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, BreakClass)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, BreakClass)> for PrefixTable {
    fn from_iter<I: IntoIterator<Item = (S, BreakClass)>>(iter: I) -> Self {
        let mut table = PrefixTable::default();
        table.extend(iter);
        table
    }
}

impl<S: Into<String>> Extend<(S, BreakClass)> for PrefixTable {
    fn extend<I: IntoIterator<Item = (S, BreakClass)>>(&mut self, iter: I) {
        for (prefix, class) in iter {
            self.insert(prefix, class);
        }
    }
}
