use serde::{Deserialize, Serialize};

use crate::text;

/// An externally supplied entity annotation (`{text, label}`).
///
/// The core consumes these as an optional enrichment but never computes
/// them; a document with no annotations is handled everywhere with neutral
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Entity {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Classification assigned to a sentence by the analyzer chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceCategory {
    Factual,
    Speculation,
    Emotional,
    Background,
    Quote,
    Filler,
    EngagementHook,
}

/// Enumerated cause recorded when a sentence is dropped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemovalReason {
    EmotionalActivation,
    Speculation,
    UnnamedSource,
    BackgroundRepeat,
    CircularQuote,
    HedgePadding,
    EngagementHook,
    LowDensity,
}

impl RemovalReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemovalReason::EmotionalActivation => "EMOTIONAL_ACTIVATION",
            RemovalReason::Speculation => "SPECULATION",
            RemovalReason::UnnamedSource => "UNNAMED_SOURCE",
            RemovalReason::BackgroundRepeat => "BACKGROUND_REPEAT",
            RemovalReason::CircularQuote => "CIRCULAR_QUOTE",
            RemovalReason::HedgePadding => "HEDGE_PADDING",
            RemovalReason::EngagementHook => "ENGAGEMENT_HOOK",
            RemovalReason::LowDensity => "LOW_DENSITY",
        }
    }
}

impl std::fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One analyzed sentence.
///
/// The text is mutable: the emotional detector may rewrite it in place when
/// individual words are stripped. `index` is the sentence's position in the
/// original document and never changes, so claims and removal records can
/// refer back to it after the sequence has been compressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    pub index: usize,
    pub entities: Vec<Entity>,

    // Scores, all in [0.0, 1.0]
    pub density: f32,
    pub novelty: f32,
    pub speculation: f32,
    pub emotional: f32,

    pub category: SentenceCategory,
    pub keep: bool,
    pub removal_reason: Option<RemovalReason>,

    // Source attribution
    pub has_named_source: bool,
    pub has_unnamed_source: bool,
    pub source_name: Option<String>,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self::with_entities(text, index, Vec::new())
    }

    pub fn with_entities(text: impl Into<String>, index: usize, entities: Vec<Entity>) -> Self {
        let text = text.into();
        let density = initial_density(&text);

        Sentence {
            text,
            index,
            entities,
            density,
            novelty: 0.0,
            speculation: 0.0,
            emotional: 0.0,
            category: SentenceCategory::Factual,
            keep: true,
            removal_reason: None,
            has_named_source: false,
            has_unnamed_source: false,
            source_name: None,
        }
    }

    /// Drop this sentence. Removal is monotonic: the first recorded reason
    /// wins and no later analyzer can resurrect a dropped sentence.
    pub fn remove(&mut self, reason: RemovalReason) {
        if !self.keep {
            return;
        }
        self.keep = false;
        self.removal_reason = Some(reason);
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Share of content words among all words, rounded to two decimals.
fn initial_density(text: &str) -> f32 {
    let total = text.split_whitespace().count();
    if total == 0 {
        return 0.0;
    }
    let content = text::content_words(text).len();
    text::round2(content as f32 / total as f32)
}
