//! The eight sentence analyzers.
//!
//! Each analyzer is one pass over the shared [`Document`]: it reads and
//! writes sentence fields in place, skips sentences already dropped, and
//! may only drop sentences — never resurrect them. A disabled analyzer
//! leaves the document untouched. The required ordering between analyzers
//! is owned by the pipeline orchestrator, not by the analyzers themselves.

pub mod claims;
pub mod emotional;
pub mod filler;
pub mod novelty;
pub mod quotes;
pub mod repetition;
pub mod sources;
pub mod speculation;

pub use claims::ClaimExtractor;
pub use emotional::EmotionalDetector;
pub use filler::FillerDetector;
pub use novelty::NoveltyScorer;
pub use quotes::QuoteIsolator;
pub use repetition::RepetitionCollapser;
pub use sources::SourceValidator;
pub use speculation::SpeculationStripper;

use crate::document::Document;

/// One analysis pass over the shared document state.
pub trait Analyzer: Send + Sync {
    fn name(&self) -> &'static str;

    fn enabled(&self) -> bool;

    fn analyze(&self, doc: &mut Document);
}
