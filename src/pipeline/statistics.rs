use std::collections::BTreeMap;

use crate::document::Document;
use crate::text;
use crate::types::{ExtractionStatistics, RemovalReason, RemovedContent};

/// Everything the statistics pass derives from a finished document.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub text: String,
    pub statistics: ExtractionStatistics,
    pub removed: Vec<RemovedContent>,
}

/// Fold the final sentence sequence and claim list into summary counts.
///
/// Runs once, after the pipeline completes; the summary is derived data
/// and is never mutated afterward.
pub fn summarize(doc: &Document) -> RunSummary {
    let text = doc.compressed_text();

    let mut removal_breakdown: BTreeMap<RemovalReason, usize> = BTreeMap::new();
    let mut removed = Vec::new();

    for sentence in doc.sentences.iter().filter(|s| !s.keep) {
        // keep == false guarantees a reason was recorded; tolerate its
        // absence rather than panic on a violated invariant.
        let Some(reason) = sentence.removal_reason else {
            debug_assert!(false, "removed sentence without a removal reason");
            continue;
        };

        *removal_breakdown.entry(reason).or_insert(0) += 1;
        removed.push(RemovedContent {
            text: sentence.text.clone(),
            reason,
            sentence_index: sentence.index,
            original_length: sentence.word_count(),
        });
    }

    let original_words = doc.original_words();
    let compressed_words = doc.kept().map(|s| s.word_count()).sum::<usize>();
    let compression_ratio = if original_words == 0 {
        0.0
    } else {
        text::round2(compressed_words as f32 / original_words as f32)
    };

    // Unique named sources, discovery order preserved.
    let mut named_sources: Vec<String> = Vec::new();
    for name in &doc.counters.named_sources {
        if !named_sources.iter().any(|n| n == name) {
            named_sources.push(name.clone());
        }
    }

    let statistics = ExtractionStatistics {
        total_sentences: doc.sentences.len(),
        kept_sentences: doc.kept().count(),
        removed_sentences: removed.len(),
        original_words,
        compressed_words,
        compression_ratio,
        removal_breakdown,
        named_sources,
        unnamed_source_references: doc.counters.unnamed_source_references,
        emotional_words_removed: doc.counters.emotional_words_removed,
        repetitions_collapsed: doc.counters.repetitions_collapsed,
        claims_extracted: doc.claims.len(),
    };

    RunSummary {
        text,
        statistics,
        removed,
    }
}
