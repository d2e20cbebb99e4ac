//! Rule-based sentence boundary detection
//!
//! This crate splits loosely formatted text into one sentence per line. A
//! period is ambiguous (it also ends abbreviations, initials and numbers),
//! so each language comes with a table of non-breaking prefixes that,
//! together with a few punctuation rules, decides where sentences end.
//! All character classes are Unicode-aware, and the ideographic full stop
//! `。` always ends a sentence.
//!
//! # Architecture
//!
//! - **Prefix tables** ([`prefix`]): per-language abbreviation data, loaded
//!   once and shared read-only.
//! - **Classifier** ([`classifier`]): inserts newlines into one paragraph.
//! - **Assembler** ([`assembler`]): groups raw lines into paragraphs and
//!   passes markup lines through.
//! - **Pipeline** ([`pipeline`]): runs whole documents through both.
//!
//! # Example
//!
//! ```rust
//! use sentsplit_core::Splitter;
//!
//! let splitter = Splitter::for_language("en").unwrap();
//! let output = splitter.split_text("Mr. Smith went to Washington. He arrived at 5 p.m. on Friday.");
//! assert_eq!(
//!     output,
//!     "Mr. Smith went to Washington.\nHe arrived at 5 p.m. on Friday.\n"
//! );
//! ```

pub mod assembler;
pub mod charclass;
pub mod classifier;
pub mod error;
pub mod pipeline;
pub mod prefix;

pub use assembler::{assemble, AssemblyEvent, TextBlock, PARAGRAPH_MARKER};
pub use classifier::classify;
pub use error::{Result, SplitError};
pub use pipeline::{classify_document, Splitter};
pub use prefix::{
    available_languages, load_prefix_table, BreakClass, LanguageInfo, PrefixSource, PrefixTable,
};
