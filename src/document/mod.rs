pub mod document;

pub use document::{AnalysisCounters, Document};
