//! Character classes shared by the boundary rules
//!
//! Classes are defined on Unicode general categories so that quotes,
//! brackets and sentence starters are recognised in every script.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Ideographic full stop used by Chinese and Japanese
pub const IDEOGRAPHIC_FULL_STOP: char = '\u{3002}';

/// Quotes, brackets and inverted punctuation that may open a sentence
pub fn is_opening_punct(c: char) -> bool {
    matches!(c, '\'' | '"' | '(' | '[' | '\u{BF}' | '\u{A1}')
        || get_general_category(c) == GeneralCategory::InitialPunctuation
}

/// Quotes and brackets that may close a sentence
pub fn is_closing_punct(c: char) -> bool {
    matches!(c, '\'' | '"' | ')' | ']')
        || get_general_category(c) == GeneralCategory::FinalPunctuation
}

/// Letters that can start a sentence
///
/// Other_Letter is accepted alongside Uppercase_Letter because uncased
/// scripts (Han, Hangul, Kana, Arabic, ...) carry no case signal.
pub fn is_sentence_starter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter | GeneralCategory::OtherLetter
    )
}

/// Word characters allowed in an abbreviation prefix
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
        || c == '_'
        || matches!(
            get_general_category(c),
            GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
                | GeneralCategory::EnclosingMark
                | GeneralCategory::ConnectorPunctuation
        )
}

/// Characters that may form an abbreviation prefix: word characters, `.` and `-`
pub fn is_prefix_char(c: char) -> bool {
    c == '.' || c == '-' || is_word_char(c)
}

/// Closing punctuation that may sit between a prefix and its trailing dots
pub fn is_trailing_closer(c: char) -> bool {
    c == '%' || is_closing_punct(c)
}

/// Characters allowed in the uppercase run of an acronym
pub fn is_acronym_char(c: char) -> bool {
    c == '-' || is_sentence_starter(c)
}
