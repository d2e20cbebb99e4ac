//! Error types for prefix loading
//!
//! Classification itself never fails; only obtaining a prefix table can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a prefix table
#[derive(Debug, Error)]
pub enum SplitError {
    /// Neither the requested language nor the English fallback is available
    #[error("no prefix table available for '{language}' and no English fallback found")]
    NoPrefixTable {
        /// The language code that was requested
        language: String,
    },

    /// Prefix data could not be parsed
    #[error("invalid prefix data for '{language}': {reason}")]
    InvalidPrefixData {
        /// The language code of the offending data
        language: String,
        /// What was wrong with it
        reason: String,
    },

    /// Reading prefix data from disk failed
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for prefix loading
pub type Result<T> = std::result::Result<T, SplitError>;
