use lazy_static::lazy_static;
use regex::Regex;

use crate::analyzers::Analyzer;
use crate::document::Document;
use crate::pipeline::config::FillerConfig;
use crate::text;
use crate::types::{RemovalReason, Sentence, SentenceCategory};

lazy_static! {
    /// Clickbait transitions that exist to keep the reader scrolling.
    static ref ENGAGEMENT_HOOKS: Vec<Regex> = [
        r"here'?s what you need to know",
        r"what happened next will surprise you",
        r"but that'?s not the whole story",
        r"stay tuned for more",
        r"we'?ll keep you posted",
        r"you won'?t believe",
        r"what this means for you",
        r"the real story behind",
        r"everything you need to know",
        r"here'?s why that matters",
        r"here'?s the bottom line",
        r"the takeaway",
        r"let'?s dive in",
        r"read on to find out",
        r"keep reading",
        r"scroll down",
        r"click here",
        r"don'?t miss",
        r"must[- ]read",
        r"what we know so far",
        r"developing story",
        r"more details to come",
        r"this is a breaking",
        r"breaking news",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();

    /// Sentences that are nothing but a hedge connective. Anchored both
    /// ends, with optional trailing punctuation.
    static ref TRANSITIONAL_FILLER: Vec<Regex> = [
        r"^meanwhile,?\.?$",
        r"^however,?\.?$",
        r"^furthermore,?\.?$",
        r"^additionally,?\.?$",
        r"^in addition,?\.?$",
        r"^on the other hand,?\.?$",
        r"^that said,?\.?$",
        r"^having said that,?\.?$",
        r"^at the end of the day,?\.?$",
        r"^when all is said and done,?\.?$",
        r"^it goes without saying\.?$",
        r"^needless to say\.?$",
        r"^as we all know\.?$",
        r"^it'?s worth noting\.?$",
        r"^it should be noted\.?$",
        r"^interestingly enough\.?$",
        r"^as you might expect\.?$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
}

/// Flags and removes sentences with no information content: engagement
/// hooks, pure transitional filler, very short sentences without entities
/// or quotes, and longer sentences whose entity density is too low to
/// carry anything.
pub struct FillerDetector {
    enabled: bool,
    min_word_count: usize,
    min_entity_density: f32,
}

impl FillerDetector {
    pub fn new(config: &FillerConfig) -> Self {
        FillerDetector {
            enabled: config.enabled,
            min_word_count: config.min_word_count,
            min_entity_density: config.min_entity_density,
        }
    }

    fn classify(&self, sentence: &Sentence) -> Option<RemovalReason> {
        let trimmed = sentence.text.trim();
        let lowered = trimmed.to_lowercase();

        if ENGAGEMENT_HOOKS.iter().any(|p| p.is_match(&lowered)) {
            return Some(RemovalReason::EngagementHook);
        }

        if TRANSITIONAL_FILLER.iter().any(|p| p.is_match(&lowered)) {
            return Some(RemovalReason::LowDensity);
        }

        let words = text::word_count(trimmed);

        // Short sentences survive only on the strength of an entity or a
        // quote.
        if words < self.min_word_count
            && sentence.entities.is_empty()
            && !trimmed.contains('"')
            && !trimmed.contains('\'')
        {
            return Some(RemovalReason::LowDensity);
        }

        if words >= 10 {
            let entity_density = sentence.entities.len() as f32 / words as f32;
            if entity_density < self.min_entity_density
                && sentence.density < 0.2
                && !text::has_digit(trimmed)
                && !trimmed.contains('"')
                && !trimmed.contains('\'')
            {
                return Some(RemovalReason::LowDensity);
            }
        }

        None
    }
}

impl Analyzer for FillerDetector {
    fn name(&self) -> &'static str {
        "filler_detector"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn analyze(&self, doc: &mut Document) {
        for sentence in &mut doc.sentences {
            if !sentence.keep {
                continue;
            }

            if let Some(reason) = self.classify(sentence) {
                sentence.category = match reason {
                    RemovalReason::EngagementHook => SentenceCategory::EngagementHook,
                    _ => SentenceCategory::Filler,
                };
                sentence.remove(reason);
            }
        }
    }
}
