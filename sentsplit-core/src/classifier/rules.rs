//! Substitution rules for unambiguous sentence boundaries
//!
//! Each rule scans the whole string left to right and rewrites every
//! non-overlapping match, the same way a global regex substitution would.
//! A match names the span that becomes a newline (usually the space run
//! between the two sentences) and the position where scanning resumes.

use crate::charclass::{
    is_closing_punct, is_opening_punct, is_sentence_starter, IDEOGRAPHIC_FULL_STOP,
};
use std::fmt;
use std::ops::Range;

/// A single rewrite produced by a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Characters replaced by a newline; may be empty for a pure insertion
    pub replace: Range<usize>,
    /// First character not consumed by the match
    pub resume: usize,
}

/// A named substitution rule
#[derive(Clone, Copy)]
pub struct SubstitutionRule {
    name: &'static str,
    matcher: fn(&[char], usize) -> Option<Rewrite>,
}

impl fmt::Debug for SubstitutionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubstitutionRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Rules in the order they are applied
pub const SUBSTITUTION_RULES: &[SubstitutionRule] = &[
    SubstitutionRule {
        name: "question-exclamation",
        matcher: match_question_exclamation,
    },
    SubstitutionRule {
        name: "multi-dot",
        matcher: match_multi_dot,
    },
    SubstitutionRule {
        name: "closing-quote",
        matcher: match_closing_quote,
    },
    SubstitutionRule {
        name: "opening-quote",
        matcher: match_opening_quote,
    },
    SubstitutionRule {
        name: "ideographic-full-stop",
        matcher: match_ideographic_full_stop,
    },
];

impl SubstitutionRule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Try to match the rule starting exactly at `pos`
    pub fn match_at(&self, chars: &[char], pos: usize) -> Option<Rewrite> {
        (self.matcher)(chars, pos)
    }

    /// Rewrite every non-overlapping match in `text`
    pub fn apply(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len() + 8);
        let mut pos = 0;

        while pos < chars.len() {
            match self.match_at(&chars, pos) {
                Some(rewrite) => {
                    out.extend(&chars[pos..rewrite.replace.start]);
                    out.push('\n');
                    out.extend(&chars[rewrite.replace.end..rewrite.resume]);
                    pos = rewrite.resume;
                }
                None => {
                    out.push(chars[pos]);
                    pos += 1;
                }
            }
        }

        out
    }
}

/// Apply all rules in order
pub fn apply_all(text: &str) -> String {
    SUBSTITUTION_RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

fn skip_while(chars: &[char], from: usize, pred: impl Fn(char) -> bool) -> usize {
    chars[from..]
        .iter()
        .position(|&c| !pred(c))
        .map_or(chars.len(), |offset| from + offset)
}

fn skip_spaces(chars: &[char], from: usize) -> usize {
    skip_while(chars, from, |c| c == ' ')
}

fn is_terminator(c: char) -> bool {
    matches!(c, '?' | '!' | '.')
}

/// openers* spaces* starter, returning the index just past the starter
fn match_sentence_start(chars: &[char], from: usize, min_openers: usize) -> Option<usize> {
    let after_openers = skip_while(chars, from, is_opening_punct);
    if after_openers - from < min_openers {
        return None;
    }
    let start = skip_spaces(chars, after_openers);
    chars
        .get(start)
        .filter(|&&c| is_sentence_starter(c))
        .map(|_| start + 1)
}

/// `?` or `!`, spaces, openers*, starter
fn match_question_exclamation(chars: &[char], pos: usize) -> Option<Rewrite> {
    if !matches!(chars[pos], '?' | '!') {
        return None;
    }
    let spaces_end = skip_spaces(chars, pos + 1);
    if spaces_end == pos + 1 {
        return None;
    }
    let starter = skip_while(chars, spaces_end, is_opening_punct);
    chars
        .get(starter)
        .filter(|&&c| is_sentence_starter(c))
        .map(|_| Rewrite {
            replace: pos + 1..spaces_end,
            resume: starter + 1,
        })
}

/// two or more dots, spaces, openers*, starter
fn match_multi_dot(chars: &[char], pos: usize) -> Option<Rewrite> {
    let dots_end = skip_while(chars, pos, |c| c == '.');
    if dots_end - pos < 2 {
        return None;
    }
    let spaces_end = skip_spaces(chars, dots_end);
    if spaces_end == dots_end {
        return None;
    }
    let starter = skip_while(chars, spaces_end, is_opening_punct);
    chars
        .get(starter)
        .filter(|&&c| is_sentence_starter(c))
        .map(|_| Rewrite {
            replace: dots_end..spaces_end,
            resume: starter + 1,
        })
}

/// terminator, spaces*, closers+, spaces, openers*, spaces*, starter
fn match_closing_quote(chars: &[char], pos: usize) -> Option<Rewrite> {
    if !is_terminator(chars[pos]) {
        return None;
    }
    let closers_start = skip_spaces(chars, pos + 1);
    let closers_end = skip_while(chars, closers_start, is_closing_punct);
    if closers_end == closers_start {
        return None;
    }
    let spaces_end = skip_spaces(chars, closers_end);
    if spaces_end == closers_end {
        return None;
    }
    match_sentence_start(chars, spaces_end, 0).map(|resume| Rewrite {
        replace: closers_end..spaces_end,
        resume,
    })
}

/// terminator, spaces, openers+, spaces*, starter
fn match_opening_quote(chars: &[char], pos: usize) -> Option<Rewrite> {
    if !is_terminator(chars[pos]) {
        return None;
    }
    let spaces_end = skip_spaces(chars, pos + 1);
    if spaces_end == pos + 1 {
        return None;
    }
    match_sentence_start(chars, spaces_end, 1).map(|resume| Rewrite {
        replace: pos + 1..spaces_end,
        resume,
    })
}

/// `。` is always followed by a break
fn match_ideographic_full_stop(chars: &[char], pos: usize) -> Option<Rewrite> {
    (chars[pos] == IDEOGRAPHIC_FULL_STOP).then_some(Rewrite {
        replace: pos + 1..pos + 1,
        resume: pos + 1,
    })
}
