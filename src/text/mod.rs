pub mod predicates;
pub mod words;

pub use predicates::{has_digit, has_excessive_punctuation, has_quote_mark, is_mostly_caps};
pub use words::{
    content_word_set, content_words, has_meaningful_content, normalize_whitespace, remove_words,
    strip_punctuation, word_count, STOP_WORDS,
};

/// Round a score to two decimals. Every score that leaves the crate goes
/// through this, so serialized output is stable across platforms.
pub fn round2(score: f32) -> f32 {
    (score * 100.0).round() / 100.0
}

/// Clamp a score into [0.0, 1.0].
pub fn clamp01(score: f32) -> f32 {
    score.clamp(0.0, 1.0)
}
