//! Word-level text utilities shared by the analyzers.
//!
//! A "content word" is a token, lower-cased and stripped of punctuation,
//! that is not a stop word and is longer than two characters. Every
//! similarity and novelty computation in the crate is defined over content
//! words, so the stop-word list and the stripping rules live here in one
//! place.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Stop words excluded from content-word sets.
    pub static ref STOP_WORDS: HashSet<&'static str> = [
        // Articles
        "a", "an", "the",
        // Be / have / do
        "is", "are", "was", "were", "be", "been", "being",
        "have", "has", "had", "do", "does", "did",
        // Modals
        "will", "would", "could", "should", "may", "might", "must", "shall", "can",
        // Prepositions
        "to", "of", "in", "for", "on", "with", "at", "by", "from", "as", "into",
        "through", "during", "before", "after", "above", "below", "between",
        "under", "over", "out", "up", "down", "off", "about", "around",
        // Conjunctions
        "and", "but", "or", "nor", "so", "yet", "both", "either", "neither",
        // Pronouns and determiners
        "i", "me", "my", "mine", "myself",
        "you", "your", "yours", "yourself",
        "he", "him", "his", "himself",
        "she", "her", "hers", "herself",
        "it", "its", "itself",
        "we", "us", "our", "ours", "ourselves",
        "they", "them", "their", "theirs", "themselves",
        "this", "that", "these", "those",
        "who", "whom", "whose", "which", "what",
        // Adverbs and the rest
        "not", "only", "own", "same", "than", "too", "very", "just", "also",
        "again", "further", "then", "once", "here", "there", "when", "where",
        "why", "how", "all", "each", "every", "any", "some", "no", "other",
        "more", "most", "such",
        // Reporting verbs so attribution phrasing never counts as content
        "said", "says", "told", "asked", "added", "noted", "stated",
    ]
    .into_iter()
    .collect();

    static ref MULTI_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(r"\s+([.,!?;:])").unwrap();
    static ref DOUBLED_PUNCT: Regex = Regex::new(r"([.,!?;:])\s*[.,!?;:]").unwrap();
}

const EDGE_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '-', '[', ']', '{', '}', '«', '»', '\u{201c}',
    '\u{201d}', '\u{2018}', '\u{2019}', '…', '—', '–',
];

/// Strip leading and trailing punctuation from a single word.
pub fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| EDGE_PUNCTUATION.contains(&c))
}

/// Extract content words from text, lower-cased, in token order.
pub fn content_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split_whitespace()
        .map(strip_punctuation)
        .filter(|w| w.len() > 2 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Content words as a set, for overlap comparisons.
pub fn content_word_set(text: &str) -> HashSet<String> {
    content_words(text).into_iter().collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whether enough content words remain for the text to stand on its own.
pub fn has_meaningful_content(text: &str, min_content_words: usize) -> bool {
    content_words(text).len() >= min_content_words
}

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    MULTI_WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Remove whole-word, case-insensitive occurrences of each word, then
/// repair the whitespace and punctuation spacing left behind.
pub fn remove_words(text: &str, words: &[String]) -> String {
    let mut result = text.to_string();
    for word in words {
        // Built per call: the word list is data-dependent, unlike the
        // static lexicons.
        if let Ok(pattern) = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word))) {
            result = pattern.replace_all(&result, "").into_owned();
        }
    }

    let result = normalize_whitespace(&result);
    let result = SPACE_BEFORE_PUNCT.replace_all(&result, "$1");
    DOUBLED_PUNCT.replace_all(&result, "$1").into_owned()
}
