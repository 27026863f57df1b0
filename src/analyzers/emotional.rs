use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::analyzers::Analyzer;
use crate::document::Document;
use crate::pipeline::config::{EmotionalConfig, Mode};
use crate::text;
use crate::types::{RemovalReason, Sentence, SentenceCategory};

lazy_static! {
    static ref EMOTIONAL_ACTIVATION: HashSet<&'static str> = [
        "shocking", "stunning", "alarming", "unprecedented", "bombshell",
        "explosive", "devastating", "terrifying", "outrageous", "scandalous",
        "horrifying", "incredible", "unbelievable", "jaw-dropping",
        "mind-blowing", "earth-shattering", "groundbreaking", "game-changing",
        "revolutionary", "historic", "monumental", "seismic", "dramatic",
        "remarkable", "extraordinary", "sensational", "staggering",
        "astonishing", "astounding", "breathtaking", "phenomenal",
        "spectacular",
    ]
    .into_iter()
    .collect();

    static ref SUPERLATIVES: HashSet<&'static str> = [
        "biggest", "largest", "worst", "best", "greatest", "highest",
        "lowest", "most", "least", "first-ever", "never-before-seen",
        "once-in-a-lifetime", "record-breaking", "all-time", "ultimate",
        "absolute", "complete", "total", "utter", "sheer",
    ]
    .into_iter()
    .collect();

    static ref FEAR_ANGER: HashSet<&'static str> = [
        "terrifying", "frightening", "scary", "horrific", "nightmare",
        "catastrophic", "disastrous", "devastating", "chaotic", "violent",
        "brutal", "savage", "vicious", "cruel", "sinister", "dangerous",
        "threatening", "menacing", "ominous", "dire", "grim", "bleak",
        "doom", "gloom", "fury", "rage", "outrage", "wrath", "anger",
    ]
    .into_iter()
    .collect();
}

/// Matched as substrings: several are multi-word phrases.
static URGENCY_TERMS: &[&str] = &[
    "breaking", "urgent", "critical", "emergency", "must-read", "must-see", "don't miss", "alert",
    "warning", "crisis", "developing", "just in", "exclusive", "special report",
];

/// What the scorer found in one sentence: the offending words (stripped in
/// `remove` mode) and the caps/punctuation signals (score bonuses only,
/// never stripped).
struct EmotionalSignals {
    words: Vec<String>,
    caps: bool,
    punctuation: bool,
}

/// Detects emotional activation language: lexicon hits, all-caps shouting,
/// and punctuation runs. In `remove` mode the offending words are stripped
/// in place; if fewer than two content words survive, the whole sentence
/// goes.
pub struct EmotionalDetector {
    enabled: bool,
    mode: Mode,
    threshold: f32,
    lexicon: HashSet<&'static str>,
}

impl EmotionalDetector {
    pub fn new(config: &EmotionalConfig) -> Self {
        let mut lexicon: HashSet<&'static str> = EMOTIONAL_ACTIVATION
            .iter()
            .chain(FEAR_ANGER.iter())
            .copied()
            .collect();
        if config.track_superlatives {
            lexicon.extend(SUPERLATIVES.iter().copied());
        }

        EmotionalDetector {
            enabled: config.enabled,
            mode: config.mode,
            threshold: config.threshold,
            lexicon,
        }
    }

    fn score(&self, sentence: &Sentence) -> (f32, EmotionalSignals) {
        let lowered = sentence.text.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();
        let word_count = words.len();

        let mut signals = EmotionalSignals {
            words: Vec::new(),
            caps: false,
            punctuation: false,
        };

        if word_count == 0 {
            return (0.0, signals);
        }

        for word in &words {
            let clean = text::strip_punctuation(word);
            if self.lexicon.contains(clean) {
                signals.words.push(clean.to_string());
            }
        }

        for term in URGENCY_TERMS.iter() {
            if lowered.contains(term) {
                signals.words.push((*term).to_string());
            }
        }

        signals.caps = text::is_mostly_caps(&sentence.text, 0.3);
        signals.punctuation = text::has_excessive_punctuation(&sentence.text);

        // Ratio of lexicon hits, scaled up so a single loaded word in a
        // short sentence already registers, plus fixed signal bonuses.
        let base = signals.words.len() as f32 / word_count as f32;
        let mut bonus = 0.0;
        if signals.caps {
            bonus += 0.1;
        }
        if signals.punctuation {
            bonus += 0.1;
        }

        let score = text::round2((base * 3.0 + bonus).min(1.0));
        (score, signals)
    }
}

impl Analyzer for EmotionalDetector {
    fn name(&self) -> &'static str {
        "emotional_detector"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn analyze(&self, doc: &mut Document) {
        for sentence in &mut doc.sentences {
            if !sentence.keep {
                continue;
            }

            let (score, signals) = self.score(sentence);
            sentence.emotional = score;

            if score < self.threshold {
                continue;
            }

            sentence.category = SentenceCategory::Emotional;

            if self.mode == Mode::Remove && !signals.words.is_empty() {
                let cleaned = text::remove_words(&sentence.text, &signals.words);
                doc.counters.emotional_words_removed += signals.words.len();

                if text::has_meaningful_content(&cleaned, 2) {
                    sentence.text = cleaned;
                } else {
                    sentence.remove(RemovalReason::EmotionalActivation);
                }
            }
        }
    }
}
