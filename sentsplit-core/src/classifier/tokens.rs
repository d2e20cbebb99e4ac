//! Token-level disambiguation of bare periods
//!
//! After the substitution rules, the only unresolved candidates are tokens
//! ending in `.`. Whether such a token ends a sentence depends on what
//! precedes the dot (a known abbreviation, an acronym) and on whether the
//! next token looks like the start of a sentence.

use crate::charclass::{
    is_acronym_char, is_opening_punct, is_prefix_char, is_sentence_starter, is_trailing_closer,
};
use crate::prefix::{BreakClass, PrefixTable};
use log::trace;

/// Shape of a token that ends in one or more dots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodEnding<'a> {
    /// Word characters, dots and hyphens before the trailing punctuation
    pub prefix: &'a str,
    /// Whether closing quotes or brackets sit between prefix and dots
    pub has_closing_punct: bool,
}

/// Outcome for a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodDecision {
    /// Token does not end in a period
    NotApplicable,
    /// Prefix is a known always-non-breaking abbreviation
    KnownAbbreviation,
    /// Token ends in a dotted uppercase run
    Acronym,
    /// Numeric-only prefix followed by a number
    NumericReference,
    /// Next token starts a new sentence
    Break,
    /// Next token does not look like a sentence start
    MidSentence,
}

impl PeriodDecision {
    pub fn is_break(self) -> bool {
        self == PeriodDecision::Break
    }
}

/// Split a token into `prefix closers dots`, consuming the whole token
///
/// The prefix is greedy, so without closers it keeps every dot but the
/// last one (`"Mr.."` has prefix `"Mr."`).
pub fn parse_period_ending(token: &str) -> Option<PeriodEnding<'_>> {
    let prefix_end = token
        .find(|c: char| !is_prefix_char(c))
        .unwrap_or(token.len());
    let rest = &token[prefix_end..];
    let closers_len = rest
        .find(|c: char| !is_trailing_closer(c))
        .unwrap_or(rest.len());
    let (closers, dots) = rest.split_at(closers_len);

    if closers.is_empty() {
        if !dots.is_empty() || !token.ends_with('.') {
            return None;
        }
        return Some(PeriodEnding {
            prefix: &token[..token.len() - 1],
            has_closing_punct: false,
        });
    }

    if dots.is_empty() || !dots.chars().all(|c| c == '.') {
        return None;
    }
    Some(PeriodEnding {
        prefix: &token[..prefix_end],
        has_closing_punct: true,
    })
}

/// Whether the token ends in `.` + uppercase letters or hyphens + dots
pub fn is_acronym(token: &str) -> bool {
    let body = token.trim_end_matches('.');
    if body.len() == token.len() {
        return false;
    }
    let head = body.trim_end_matches(is_acronym_char);
    head.len() < body.len() && head.ends_with('.')
}

/// Optional spaces and opening punctuation, then a starter letter or digit
pub fn looks_like_sentence_start(token: &str) -> bool {
    token
        .trim_start_matches(' ')
        .trim_start_matches(is_opening_punct)
        .trim_start_matches(' ')
        .chars()
        .next()
        .is_some_and(|c| is_sentence_starter(c) || c.is_ascii_digit())
}

fn starts_with_digit(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Decide whether a break follows `token`, given the token after it
pub fn decide(token: &str, next: &str, table: &PrefixTable) -> PeriodDecision {
    let Some(ending) = parse_period_ending(token) else {
        return PeriodDecision::NotApplicable;
    };
    let class = if ending.prefix.is_empty() || ending.has_closing_punct {
        None
    } else {
        table.lookup(ending.prefix)
    };

    if class == Some(BreakClass::AlwaysNonBreaking) {
        PeriodDecision::KnownAbbreviation
    } else if is_acronym(token) {
        PeriodDecision::Acronym
    } else if !looks_like_sentence_start(next) {
        PeriodDecision::MidSentence
    } else if class == Some(BreakClass::NumericOnlyNonBreaking) && starts_with_digit(next) {
        PeriodDecision::NumericReference
    } else {
        PeriodDecision::Break
    }
}

/// Rejoin space-separated tokens, turning the separator after every
/// sentence-final period into a newline
pub fn break_ambiguous_periods(text: &str, table: &PrefixTable) -> String {
    let tokens: Vec<&str> = text.split(' ').collect();
    let mut out = String::with_capacity(text.len() + 16);

    for (i, token) in tokens.iter().enumerate() {
        out.push_str(token);
        let Some(next) = tokens.get(i + 1) else {
            break;
        };

        let decision = decide(token, next, table);
        if decision != PeriodDecision::NotApplicable {
            trace!("{token:?} before {next:?}: {decision:?}");
        }
        out.push(if decision.is_break() { '\n' } else { ' ' });
    }

    out
}
