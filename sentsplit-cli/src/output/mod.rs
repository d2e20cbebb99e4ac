//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single line of classified text
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of `{index, text}` records
    Json,
}

impl OutputFormat {
    /// Build a formatter of this kind over `writer`
    pub fn formatter<'a, W: Write + 'a>(self, writer: W) -> Box<dyn OutputFormatter + 'a> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        }
    }
}

/// Feed every line of classified output through `formatter`
pub fn write_output(formatter: &mut dyn OutputFormatter, classified: &str) -> Result<()> {
    for line in classified.lines() {
        formatter.write_line(line)?;
    }
    formatter.finish()
}
