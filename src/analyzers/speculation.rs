use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::analyzers::Analyzer;
use crate::document::Document;
use crate::pipeline::config::{Mode, SpeculationConfig};
use crate::text;
use crate::types::{RemovalReason, Sentence, SentenceCategory};

lazy_static! {
    static ref MODAL_VERBS: HashSet<&'static str> =
        ["could", "might", "may", "would", "should"].into_iter().collect();

    static ref UNCERTAINTY_PHRASES: Vec<Regex> = [
        r"it appears",
        r"it seems",
        r"is thought to",
        r"is believed to",
        r"is expected to",
        r"is likely to",
        r"is set to",
        r"is poised to",
        r"could potentially",
        r"might possibly",
        r"may perhaps",
        r"remains to be seen",
        r"time will tell",
        r"only time will tell",
        r"it remains unclear",
        r"it'?s unclear",
        r"it'?s not clear",
        r"it'?s uncertain",
        r"questions remain",
        r"raises questions",
        r"raises concerns",
        r"some say",
        r"some believe",
        r"some think",
        r"many believe",
        r"many think",
        r"observers say",
        r"observers believe",
        r"analysts say",
        r"analysts believe",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();

    static ref FUTURE_SPECULATION: Vec<Regex> = [
        r"is expected to",
        r"are expected to",
        r"will likely",
        r"will probably",
        r"is likely to",
        r"are likely to",
        r"is set to",
        r"are set to",
        r"is poised to",
        r"are poised to",
        r"is slated to",
        r"are slated to",
        r"could lead to",
        r"might result in",
        r"may cause",
        r"could mean",
        r"might mean",
        r"may indicate",
        r"could signal",
        r"might signal",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
}

static HEDGING_WORDS: &[&str] = &[
    "potentially", "possibly", "perhaps", "apparently", "seemingly", "reportedly", "allegedly",
    "supposedly", "ostensibly", "presumably", "conceivably", "theoretically", "hypothetically",
];

// Marker weights. Modals scale from 1.0 at the start of the sentence to
// 1.5 at the end, biasing against trailing hedges.
const HEDGE_WEIGHT: f32 = 1.2;
const UNCERTAINTY_WEIGHT: f32 = 1.5;
const FUTURE_WEIGHT: f32 = 1.3;

// Three markers at full weight saturate the score.
const NORMALIZATION: f32 = 4.5;

/// Scores hedged and speculative phrasing: modal verbs, hedging adverbs,
/// uncertainty phrases, and future speculation, with a weighted sum
/// normalized into [0.0, 1.0]. The resulting score doubles as a confidence
/// penalty in the claim extractor, so this pass must run before it.
pub struct SpeculationStripper {
    enabled: bool,
    mode: Mode,
    threshold: f32,
    max_hedges: usize,
}

impl SpeculationStripper {
    pub fn new(config: &SpeculationConfig) -> Self {
        SpeculationStripper {
            enabled: config.enabled,
            mode: config.mode,
            threshold: config.threshold,
            max_hedges: config.max_hedges_per_sentence,
        }
    }

    fn score(&self, sentence: &Sentence) -> (f32, usize) {
        let lowered = sentence.text.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();
        let word_count = words.len();

        if word_count == 0 {
            return (0.0, 0);
        }

        let mut markers = 0usize;
        let mut weighted = 0.0f32;

        for (position, word) in words.iter().enumerate() {
            let clean = text::strip_punctuation(word);
            if MODAL_VERBS.contains(clean) {
                markers += 1;
                weighted += 1.0 + (position as f32 / word_count as f32) * 0.5;
            }
        }

        for hedge in HEDGING_WORDS.iter() {
            if lowered.contains(hedge) {
                markers += 1;
                weighted += HEDGE_WEIGHT;
            }
        }

        for pattern in UNCERTAINTY_PHRASES.iter() {
            if pattern.is_match(&lowered) {
                markers += 1;
                weighted += UNCERTAINTY_WEIGHT;
            }
        }

        for pattern in FUTURE_SPECULATION.iter() {
            if pattern.is_match(&lowered) {
                markers += 1;
                weighted += FUTURE_WEIGHT;
            }
        }

        (text::round2((weighted / NORMALIZATION).min(1.0)), markers)
    }
}

impl Analyzer for SpeculationStripper {
    fn name(&self) -> &'static str {
        "speculation_stripper"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn analyze(&self, doc: &mut Document) {
        for sentence in &mut doc.sentences {
            if !sentence.keep {
                continue;
            }

            let (score, markers) = self.score(sentence);
            sentence.speculation = score;

            if score >= self.threshold || markers > self.max_hedges {
                sentence.category = SentenceCategory::Speculation;

                if self.mode == Mode::Remove {
                    sentence.remove(RemovalReason::Speculation);
                }
            }
        }
    }
}
