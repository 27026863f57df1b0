pub mod config;
pub mod statistics;

pub use config::{
    ClaimConfig, ConfigError, EmotionalConfig, FillerConfig, Mode, NoveltyConfig, PipelineConfig,
    QuoteConfig, RepetitionConfig, SourceConfig, SpeculationConfig,
};
pub use statistics::{summarize, RunSummary};

use chrono::Utc;

use crate::analyzers::{
    Analyzer, ClaimExtractor, EmotionalDetector, FillerDetector, NoveltyScorer, QuoteIsolator,
    RepetitionCollapser, SourceValidator, SpeculationStripper,
};
use crate::document::Document;
use crate::types::{ArticleId, Entity, ExtractionResult};

/// One article's worth of input: pre-segmented sentences plus optional
/// parallel entity annotations and whatever metadata the caller tracks.
#[derive(Debug, Clone, Default)]
pub struct ArticleInput {
    pub id: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub source: Option<String>,
    pub sentences: Vec<String>,
    pub entities: Option<Vec<Vec<Entity>>>,
}

impl ArticleInput {
    pub fn from_sentences(sentences: Vec<String>) -> Self {
        ArticleInput {
            sentences,
            ..Default::default()
        }
    }
}

/// Runs the analyzer chain over one document at a time.
///
/// The order is fixed by data dependencies and owned here, nowhere else:
/// the quote isolator and claim extractor read `has_named_source` written
/// by the source validator; the claim extractor reads the speculation and
/// emotional scores as confidence penalties; and the repetition collapser
/// must see the final keep/remove state so it clusters only surviving
/// content. Disabled analyzers are skipped in place.
///
/// Per-document work is single-threaded and purely data-dependent. A
/// pipeline is immutable once built, so a batch driver may share one
/// across threads and run independent documents concurrently.
pub struct ExtractionPipeline {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl ExtractionPipeline {
    /// Build the analyzer chain. Fails fast on out-of-range thresholds —
    /// a pipeline that constructed successfully never rejects a document
    /// over configuration.
    pub fn new(config: PipelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let analyzers: Vec<Box<dyn Analyzer>> = vec![
            Box::new(SourceValidator::new(&config.sources)),
            Box::new(FillerDetector::new(&config.filler)),
            Box::new(EmotionalDetector::new(&config.emotional)),
            Box::new(SpeculationStripper::new(&config.speculation)),
            Box::new(QuoteIsolator::new(&config.quotes)),
            Box::new(ClaimExtractor::new(&config.claims)),
            Box::new(NoveltyScorer::new(&config.novelty)),
            Box::new(RepetitionCollapser::new(&config.repetition)),
        ];

        Ok(ExtractionPipeline { analyzers })
    }

    /// Run every enabled analyzer over the document, in order, in place.
    pub fn run(&self, doc: &mut Document) {
        for analyzer in &self.analyzers {
            if !analyzer.enabled() {
                tracing::trace!(analyzer = analyzer.name(), "analyzer disabled, skipping");
                continue;
            }
            analyzer.analyze(doc);
            tracing::debug!(
                analyzer = analyzer.name(),
                kept = doc.kept().count(),
                claims = doc.claims.len(),
                "analyzer pass complete"
            );
        }
    }

    /// Ingest, analyze, and summarize one article in a single call.
    ///
    /// An empty sentence list is not an error: it produces an empty result
    /// with zero statistics.
    pub fn extract(&self, input: ArticleInput) -> ExtractionResult {
        let mut doc = Document::ingest(input.sentences, input.entities);
        self.run(&mut doc);

        let RunSummary {
            text,
            statistics,
            removed,
        } = summarize(&doc);

        let id = match input.id {
            Some(id) => ArticleId::new(id),
            None => ArticleId::from_content(&text),
        };

        tracing::debug!(
            id = id.as_str(),
            original_words = statistics.original_words,
            compressed_words = statistics.compressed_words,
            claims = statistics.claims_extracted,
            "extraction complete"
        );

        ExtractionResult {
            id,
            url: input.url,
            title: input.title,
            source: input.source,
            processed_at: Utc::now(),
            text,
            claims: doc.claims,
            removed,
            statistics,
            sentences: doc.sentences,
        }
    }
}
