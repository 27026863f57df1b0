//! Cheap character-level signals read by several analyzers.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PUNCT_RUN: Regex = Regex::new(r"[!?]{2,}").unwrap();
}

pub fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Straight or typographic quotation marks.
pub fn has_quote_mark(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '"' | '\'' | '\u{201c}' | '\u{201d}' | '\u{2018}' | '\u{2019}'))
}

/// Whether the share of all-caps words (longer than two characters)
/// exceeds `threshold`.
pub fn is_mostly_caps(text: &str, threshold: f32) -> bool {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return false;
    }

    let caps = words
        .iter()
        .filter(|w| w.len() > 2 && w.chars().all(|c| !c.is_alphabetic() || c.is_uppercase()))
        .filter(|w| w.chars().any(|c| c.is_alphabetic()))
        .count();

    caps as f32 / words.len() as f32 > threshold
}

/// Runs of exclamation or question marks (`!!!`, `?!?`).
pub fn has_excessive_punctuation(text: &str) -> bool {
    PUNCT_RUN.is_match(text)
}
