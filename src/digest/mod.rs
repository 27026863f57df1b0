//! Digest assembly: the similarity clusterer applied one level up.
//!
//! After per-article extraction, near-identical articles fetched from
//! multiple sources are merged and the survivors are grouped under fixed
//! topic labels for the digest sections.

pub mod dedup;
pub mod topics;

pub use dedup::Deduplicator;
pub use topics::{TopicClusterer, TopicSection};
