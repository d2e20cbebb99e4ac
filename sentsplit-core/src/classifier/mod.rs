//! Sentence boundary classification for a single paragraph
//!
//! Classification runs in four stages:
//!
//! 1. space normalization,
//! 2. whole-string substitution rules for unambiguous boundaries
//!    (`?`/`!`, ellipses, quoted endings, `。`),
//! 3. a token scan that resolves bare periods using the prefix table,
//!    an acronym check and a look at the following token,
//! 4. cleanup that leaves exactly one trailing newline.
//!
//! The function is total: every input, including the empty string,
//! produces an output.

pub mod normalize;
pub mod rules;
pub mod tokens;

use crate::prefix::PrefixTable;

pub use rules::{SubstitutionRule, SUBSTITUTION_RULES};
pub use tokens::PeriodDecision;

/// Insert a newline at every sentence boundary of `paragraph`
pub fn classify(paragraph: &str, table: &PrefixTable) -> String {
    let text = normalize::collapse_spaces(paragraph);
    let text = rules::apply_all(&text);
    let text = tokens::break_ambiguous_periods(&text, table);
    normalize::finish(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::BreakClass;

    fn english() -> PrefixTable {
        [
            ("Mr", BreakClass::AlwaysNonBreaking),
            ("Mrs", BreakClass::AlwaysNonBreaking),
            ("Dr", BreakClass::AlwaysNonBreaking),
            ("No", BreakClass::NumericOnlyNonBreaking),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_basic_english() {
        let text = "Mr Dursley was the director. Of a firm called . Grunnings, which made drills.";
        assert_eq!(
            classify(text, &english()),
            "Mr Dursley was the director.\nOf a firm called .\nGrunnings, which made drills.\n"
        );
    }

    #[test]
    fn test_non_breaking_prefix() {
        let text = "Mr. Dursley was the director. Of a firm called .";
        assert_eq!(
            classify(text, &english()),
            "Mr. Dursley was the director.\nOf a firm called .\n"
        );
    }

    #[test]
    fn test_quoted_dialogue() {
        let text = "\"William Crosby, why, what brings you out in such a storm as this? Strip off your coat, and draw up to the fire, can't ye?\"";
        assert_eq!(
            classify(text, &english()),
            "\"William Crosby, why, what brings you out in such a storm as this?\nStrip off your coat, and draw up to the fire, can't ye?\"\n"
        );
    }

    #[test]
    fn test_numeric_only_prefix() {
        assert_eq!(
            classify("See No. 5 for details.", &english()),
            "See No. 5 for details.\n"
        );
        assert_eq!(
            classify("See No. Entries follow.", &english()),
            "See No.\nEntries follow.\n"
        );
    }

    #[test]
    fn test_ideographic_full_stop() {
        assert_eq!(
            classify("私は学生です。あなたは？はい。", &english()),
            "私は学生です。\nあなたは？はい。\n"
        );
    }

    #[test]
    fn test_acronym_does_not_break() {
        let table = PrefixTable::default();
        assert_eq!(
            classify("He moved to the U.S. Army base.", &table),
            "He moved to the U.S. Army base.\n"
        );
    }

    #[test]
    fn test_closing_quote_after_period() {
        assert_eq!(
            classify("\"I am leaving.\" She shut the door.", &english()),
            "\"I am leaving.\"\nShe shut the door.\n"
        );
    }

    #[test]
    fn test_decimal_and_lowercase_followers() {
        assert_eq!(
            classify("It costs 3.50 dollars. approx. five of them.", &english()),
            "It costs 3.50 dollars. approx. five of them.\n"
        );
    }

    #[test]
    fn test_whitespace_normalized() {
        assert_eq!(
            classify("   Hello   world.   Bye.   ", &english()),
            "Hello world.\nBye.\n"
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(classify("", &english()), "");
        assert_eq!(classify("     ", &english()), "");
    }

    #[test]
    fn test_leftover_newlines_tolerated() {
        assert_eq!(
            classify("First line. \n Second line.\n", &english()),
            "First line.\nSecond line.\n"
        );
    }

    #[test]
    fn test_single_trailing_newline_after_full_stop() {
        assert_eq!(classify("終わり。", &english()), "終わり。\n");
    }

    #[test]
    fn test_deterministic() {
        let text = "Dr. Who? \"Yes.\" No. 7 was here... Then gone。次";
        let table = english();
        assert_eq!(classify(text, &table), classify(text, &table));
    }
}
