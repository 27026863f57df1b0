use std::collections::HashSet;

use crate::analyzers::Analyzer;
use crate::cluster;
use crate::document::Document;
use crate::pipeline::config::RepetitionConfig;
use crate::text;
use crate::types::RemovalReason;

/// Collapses near-duplicate sentences across the whole document.
///
/// This is the canonical, fully general use of the similarity clusterer:
/// every surviving sentence of sufficient length is a candidate, pairwise
/// Jaccard edges at or above the threshold are unioned transitively, and
/// each resulting cluster keeps only its earliest member.
///
/// Runs last so it clusters only content that survived every other pass.
pub struct RepetitionCollapser {
    enabled: bool,
    similarity_threshold: f32,
    min_sentence_length: usize,
}

impl RepetitionCollapser {
    pub fn new(config: &RepetitionConfig) -> Self {
        RepetitionCollapser {
            enabled: config.enabled,
            similarity_threshold: config.similarity_threshold,
            min_sentence_length: config.min_sentence_length,
        }
    }
}

impl Analyzer for RepetitionCollapser {
    fn name(&self) -> &'static str {
        "repetition_collapser"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn analyze(&self, doc: &mut Document) {
        let candidates: Vec<usize> = doc
            .sentences
            .iter()
            .enumerate()
            .filter(|(_, s)| s.keep && s.word_count() >= self.min_sentence_length)
            .map(|(i, _)| i)
            .collect();

        if candidates.len() < 2 {
            return;
        }

        let word_sets: Vec<HashSet<String>> = candidates
            .iter()
            .map(|&i| text::content_word_set(&doc.sentences[i].text))
            .collect();

        for cluster in cluster::cluster_by_similarity(&word_sets, self.similarity_threshold) {
            // Members are ascending, so the first is the earliest sentence.
            for &position in &cluster[1..] {
                doc.sentences[candidates[position]].remove(RemovalReason::BackgroundRepeat);
                doc.counters.repetitions_collapsed += 1;
            }
        }
    }
}
