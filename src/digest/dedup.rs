use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::cluster;
use crate::pipeline::ConfigError;
use crate::text::STOP_WORDS;
use crate::types::ExtractionResult;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\b\w+\b").unwrap();
}

pub const DEFAULT_DEDUP_THRESHOLD: f32 = 0.85;

/// Merges near-identical articles pulled from multiple sources.
///
/// Same union-find + Jaccard algorithm as the in-document repetition
/// collapser, at article granularity: one content-word set per article's
/// compressed text, transitive clusters at the threshold, and the longest
/// article in each cluster survives as representative.
///
/// The pairwise comparison is O(n²) over the fetched batch, so this pass
/// runs once, single-threaded, after all per-article extractions complete.
pub struct Deduplicator {
    threshold: f32,
}

impl Deduplicator {
    pub fn new(threshold: f32) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                field: "dedup.similarity_threshold",
                value: threshold,
            });
        }
        Ok(Deduplicator { threshold })
    }

    /// Drop duplicate articles, keeping each cluster's longest member.
    /// Surviving articles keep their relative order.
    pub fn deduplicate(&self, articles: Vec<ExtractionResult>) -> Vec<ExtractionResult> {
        if articles.len() <= 1 {
            return articles;
        }

        let word_sets: Vec<HashSet<String>> =
            articles.iter().map(|a| article_words(&a.text)).collect();

        let mut drop = vec![false; articles.len()];
        for cluster in cluster::cluster_by_similarity(&word_sets, self.threshold) {
            let mut representative = cluster[0];
            for &i in &cluster[1..] {
                if articles[i].text.len() > articles[representative].text.len() {
                    representative = i;
                }
            }
            for &i in &cluster {
                if i != representative {
                    drop[i] = true;
                }
            }
        }

        let dropped = drop.iter().filter(|d| **d).count();
        if dropped > 0 {
            tracing::debug!(total = articles.len(), dropped, "collapsed duplicate articles");
        }

        articles
            .into_iter()
            .zip(drop)
            .filter_map(|(article, dropped)| (!dropped).then_some(article))
            .collect()
    }

    /// All duplicate pairs with their similarity, for diagnostics.
    pub fn find_duplicates(&self, articles: &[ExtractionResult]) -> Vec<(usize, usize, f32)> {
        let word_sets: Vec<HashSet<String>> =
            articles.iter().map(|a| article_words(&a.text)).collect();

        let mut pairs = Vec::new();
        for i in 0..articles.len() {
            for j in (i + 1)..articles.len() {
                let similarity = cluster::jaccard(&word_sets[i], &word_sets[j]);
                if similarity >= self.threshold {
                    pairs.push((i, j, similarity));
                }
            }
        }
        pairs
    }
}

impl Default for Deduplicator {
    fn default() -> Self {
        Deduplicator {
            threshold: DEFAULT_DEDUP_THRESHOLD,
        }
    }
}

/// Article-level content words. Tokenized on word boundaries rather than
/// whitespace so punctuation never glues words together across a whole
/// article body.
fn article_words(body: &str) -> HashSet<String> {
    let lowered = body.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| w.len() > 2 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}
