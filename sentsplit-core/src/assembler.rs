//! Paragraph assembly from raw input lines
//!
//! Line breaks inside a paragraph carry no meaning, so consecutive text
//! lines are joined into one block. Blank lines and lines consisting of a
//! single markup tag end the current block.

use regex::Regex;
use std::sync::LazyLock;

/// Marker line emitted after a paragraph that ended at a blank line
pub const PARAGRAPH_MARKER: &str = "<P>";

static MARKUP_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<[^<>]+>$").expect("markup pattern is valid"));

/// Whether a trimmed line is an opaque markup tag such as `<doc id="1">`
pub fn is_markup_line(line: &str) -> bool {
    MARKUP_LINE.is_match(line)
}

/// Lines of one paragraph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    lines: Vec<String>,
    markup: Option<String>,
}

impl TextBlock {
    /// Trimmed source lines, in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Markup line that terminated this block, if any
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The block as classifier input: every line followed by one space
    pub fn to_paragraph(&self) -> String {
        let capacity = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut paragraph = String::with_capacity(capacity);
        for line in &self.lines {
            paragraph.push_str(line);
            paragraph.push(' ');
        }
        paragraph
    }
}

/// One unit of assembled output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyEvent {
    /// A paragraph to classify
    Text(TextBlock),
    /// A markup line passed through verbatim
    Markup(String),
    /// Paragraph separator, rendered as [`PARAGRAPH_MARKER`]
    ParagraphBreak,
}

/// Group raw lines into paragraph blocks, markup lines and paragraph breaks
pub fn assemble<I, S>(lines: I) -> Vec<AssemblyEvent>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut events = Vec::new();
    let mut block = TextBlock::default();

    for line in lines {
        let line = line.as_ref().trim();
        let markup = is_markup_line(line);

        if !markup && !line.is_empty() {
            block.lines.push(line.to_string());
            continue;
        }

        let had_text = !block.is_empty();
        if had_text {
            if markup {
                block.markup = Some(line.to_string());
            }
            events.push(AssemblyEvent::Text(std::mem::take(&mut block)));
        }

        if markup {
            events.push(AssemblyEvent::Markup(line.to_string()));
        } else if had_text {
            events.push(AssemblyEvent::ParagraphBreak);
        }
    }

    if !block.is_empty() {
        events.push(AssemblyEvent::Text(block));
    }

    events
}
