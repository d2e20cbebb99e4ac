//! Document-level driver and the `Splitter` facade

use crate::assembler::{assemble, AssemblyEvent, PARAGRAPH_MARKER};
use crate::classifier::classify;
use crate::error::Result;
use crate::prefix::{load_prefix_table, PrefixSource, PrefixTable};
use log::{debug, trace};
use std::sync::Arc;

/// Render assembled events, classifying every text block
pub fn render_events(events: &[AssemblyEvent], table: &PrefixTable) -> String {
    let mut out = String::new();

    for event in events {
        match event {
            AssemblyEvent::Text(block) => {
                trace!("Classifying block of {} lines", block.lines().len());
                out.push_str(&classify(&block.to_paragraph(), table));
            }
            AssemblyEvent::Markup(line) => {
                out.push_str(line);
                out.push('\n');
            }
            AssemblyEvent::ParagraphBreak => {
                out.push_str(PARAGRAPH_MARKER);
                out.push('\n');
            }
        }
    }

    out
}

/// Split a whole document given as lines
pub fn classify_document<I, S>(lines: I, table: &PrefixTable) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    render_events(&assemble(lines), table)
}

/// Sentence splitter bound to one language's prefix table
///
/// Cloning is cheap; clones share the same table.
#[derive(Debug, Clone)]
pub struct Splitter {
    table: Arc<PrefixTable>,
}

impl Splitter {
    /// Splitter for a language using the embedded prefix data
    pub fn for_language(language: &str) -> Result<Self> {
        Self::from_source(language, &PrefixSource::Embedded)
    }

    /// Splitter for a language using prefix data from `source`
    pub fn from_source(language: &str, source: &PrefixSource) -> Result<Self> {
        let table = load_prefix_table(language, source)?;
        debug!(
            "Splitter ready for '{}' ({} prefixes)",
            table.language(),
            table.len()
        );
        Ok(Self::with_table(table))
    }

    /// Splitter over an existing table
    pub fn with_table(table: impl Into<Arc<PrefixTable>>) -> Self {
        Self {
            table: table.into(),
        }
    }

    pub fn table(&self) -> &PrefixTable {
        &self.table
    }

    /// Classify one paragraph
    pub fn split_paragraph(&self, paragraph: &str) -> String {
        classify(paragraph, &self.table)
    }

    /// Classify a document given as lines
    pub fn split_lines<I, S>(&self, lines: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        classify_document(lines, &self.table)
    }

    /// Classify a document given as one string
    pub fn split_text(&self, text: &str) -> String {
        self.split_lines(text.split('\n'))
    }

    /// Classify independent documents, preserving input order
    #[cfg(feature = "parallel")]
    pub fn split_documents<S>(&self, documents: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        documents
            .par_iter()
            .map(|doc| self.split_text(doc.as_ref()))
            .collect()
    }

    /// Classify independent documents, preserving input order
    #[cfg(not(feature = "parallel"))]
    pub fn split_documents<S>(&self, documents: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        documents
            .iter()
            .map(|doc| self.split_text(doc.as_ref()))
            .collect()
    }
}
