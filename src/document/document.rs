use crate::types::{Claim, Entity, Sentence};

/// Counters written by individual analyzers as they mutate the sentence
/// sequence, folded into statistics when the run is summarized. Keeping
/// them on the document keeps the analyzer trait uniform — no analyzer
/// needs to be interrogated for its private tallies afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisCounters {
    /// Named sources in discovery order; may contain duplicates.
    pub named_sources: Vec<String>,
    pub unnamed_source_references: usize,
    pub emotional_words_removed: usize,
    pub repetitions_collapsed: usize,
}

/// Shared mutable state for one extraction run.
///
/// A document is created at the start of one extraction call, mutated in
/// place by each analyzer in turn, and consumed exactly once when the run
/// is summarized. It has no lifetime beyond a single extraction. Passing
/// it explicitly through the orchestrator makes the analyzer data
/// dependencies visible in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub sentences: Vec<Sentence>,
    pub claims: Vec<Claim>,
    pub counters: AnalysisCounters,

    original_words: usize,
}

impl Document {
    /// Build a document from pre-segmented sentence strings and an optional
    /// parallel list of entity annotations.
    ///
    /// Blank sentences are skipped; surviving sentences keep their position
    /// in the input list as their stable index. A shorter (or absent)
    /// annotation list means the remaining sentences carry no entities.
    pub fn ingest(sentences: Vec<String>, entities: Option<Vec<Vec<Entity>>>) -> Self {
        let mut annotations = entities.unwrap_or_default().into_iter();

        let sentences: Vec<Sentence> = sentences
            .into_iter()
            .enumerate()
            .filter_map(|(index, text)| {
                let ents = annotations.next().unwrap_or_default();
                if text.trim().is_empty() {
                    None
                } else {
                    Some(Sentence::with_entities(text.trim().to_string(), index, ents))
                }
            })
            .collect();

        let original_words = sentences.iter().map(Sentence::word_count).sum();

        Document {
            sentences,
            claims: Vec::new(),
            counters: AnalysisCounters::default(),
            original_words,
        }
    }

    /// Word count of the document as ingested, before any in-place rewrite.
    pub fn original_words(&self) -> usize {
        self.original_words
    }

    pub fn kept(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences.iter().filter(|s| s.keep)
    }

    /// The compressed body: all kept sentences joined in order.
    pub fn compressed_text(&self) -> String {
        self.kept()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
