use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::claim::Claim;
use crate::types::identifiers::ArticleId;
use crate::types::sentence::{RemovalReason, Sentence};

/// A sentence that was dropped during extraction. Built once when the run
/// is summarized and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovedContent {
    pub text: String,
    pub reason: RemovalReason,
    pub sentence_index: usize,
    /// Word count of the sentence at removal time.
    pub original_length: usize,
}

/// Derived aggregate computed once after the pipeline completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionStatistics {
    pub total_sentences: usize,
    pub kept_sentences: usize,
    pub removed_sentences: usize,

    pub original_words: usize,
    pub compressed_words: usize,
    /// `compressed_words / original_words`; 0.0 for an empty document.
    pub compression_ratio: f32,

    pub removal_breakdown: BTreeMap<RemovalReason, usize>,

    /// Unique named sources in discovery order.
    pub named_sources: Vec<String>,
    pub unnamed_source_references: usize,

    pub emotional_words_removed: usize,
    pub repetitions_collapsed: usize,
    pub claims_extracted: usize,
}

/// Complete output of one article extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub id: ArticleId,
    pub url: Option<String>,
    pub title: Option<String>,
    pub source: Option<String>,
    pub processed_at: DateTime<Utc>,

    /// The compressed body: all kept sentences joined in order.
    pub text: String,
    pub claims: Vec<Claim>,
    pub removed: Vec<RemovedContent>,
    pub statistics: ExtractionStatistics,

    /// The full analyzed sequence, kept and dropped alike, for comparison
    /// views and downstream rendering.
    pub sentences: Vec<Sentence>,
}
