use std::collections::{HashMap, HashSet};

use crate::analyzers::Analyzer;
use crate::document::Document;
use crate::pipeline::config::NoveltyConfig;
use crate::text;
use crate::types::Sentence;

/// Novelty assigned to the first kept sentence, which establishes the
/// baseline the rest of the document is measured against.
const BASELINE_NOVELTY: f32 = 0.9;

/// Scores each kept sentence by how much new information it introduces,
/// tracking entities and content terms seen so far in document order.
///
/// A sentence is scored against what came strictly before it: the running
/// sets are updated with its own entities and terms only after its score
/// is assigned, so no sentence counts its own content as novel context.
pub struct NoveltyScorer {
    enabled: bool,
    decay_factor: f32,
}

impl NoveltyScorer {
    pub fn new(config: &NoveltyConfig) -> Self {
        NoveltyScorer {
            enabled: config.enabled,
            decay_factor: config.decay_factor,
        }
    }

    fn score(
        &self,
        sentence: &Sentence,
        seen_entities: &HashSet<String>,
        seen_terms: &HashMap<String, usize>,
    ) -> f32 {
        let terms = text::content_words(&sentence.text);
        if terms.is_empty() {
            return 0.5;
        }

        let entity_novelty = entity_novelty(sentence, seen_entities);
        let term_novelty = term_novelty(&terms, seen_terms);

        let number_bonus = if text::has_digit(&sentence.text) { 0.1 } else { 0.0 };
        let quote_bonus = if text::has_quote_mark(&sentence.text) { 0.1 } else { 0.0 };

        let combined = entity_novelty * 0.4 + term_novelty * 0.4 + number_bonus + quote_bonus;

        // Later sentences pay a small positional penalty.
        let position_factor = self.decay_factor.powf(sentence.index as f32 / 10.0);

        text::round2(text::clamp01(combined * position_factor))
    }
}

/// Share of this sentence's entities not seen earlier; neutral 0.5 when
/// the sentence carries no annotations.
fn entity_novelty(sentence: &Sentence, seen: &HashSet<String>) -> f32 {
    if sentence.entities.is_empty() {
        return 0.5;
    }

    let current: HashSet<String> = sentence
        .entities
        .iter()
        .map(|e| e.text.to_lowercase())
        .collect();

    let new = current.iter().filter(|e| !seen.contains(*e)).count();
    new as f32 / current.len() as f32
}

/// Average term freshness: 1.0 unseen, 0.5 seen exactly once, 0.0 worn out.
fn term_novelty(terms: &[String], seen: &HashMap<String, usize>) -> f32 {
    let mut fresh = 0.0f32;
    for term in terms {
        match seen.get(term).copied().unwrap_or(0) {
            0 => fresh += 1.0,
            1 => fresh += 0.5,
            _ => {}
        }
    }
    fresh / terms.len() as f32
}

impl Analyzer for NoveltyScorer {
    fn name(&self) -> &'static str {
        "novelty_scorer"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn analyze(&self, doc: &mut Document) {
        let mut seen_entities: HashSet<String> = HashSet::new();
        let mut seen_terms: HashMap<String, usize> = HashMap::new();
        let mut first_kept = true;

        for sentence in &mut doc.sentences {
            if !sentence.keep {
                continue;
            }

            sentence.novelty = if first_kept {
                first_kept = false;
                BASELINE_NOVELTY
            } else {
                self.score(sentence, &seen_entities, &seen_terms)
            };

            // Update the running sets after scoring.
            for entity in &sentence.entities {
                seen_entities.insert(entity.text.to_lowercase());
            }
            for term in text::content_words(&sentence.text) {
                *seen_terms.entry(term).or_insert(0) += 1;
            }
        }
    }
}
