//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - collects lines and writes them as one array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<LineRecord>,
}

/// One line of classified output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    /// Zero-based position in the output
    pub index: usize,
    /// The line, without its newline
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.records.push(LineRecord {
            index: self.records.len(),
            text: line.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
