//! Deterministic news-article compression engine.
//!
//! `digest-core` takes a pre-segmented article body and scores every
//! sentence along independent semantic axes — speculation, emotional
//! activation, filler and engagement bait, novelty, source attribution,
//! quote circularity — then removes or flags low-value sentences, extracts
//! discrete falsifiable claims, and collapses near-duplicate content. The
//! same word-overlap + union-find clustering primitive is reused one level
//! up to deduplicate near-identical articles and assign topic labels when
//! assembling a digest.
//!
//! All operations are deterministic and free of I/O — identical inputs
//! always produce identical outputs. Fetching, HTML extraction, rendering,
//! and persistence are external collaborators consuming plain in-memory
//! structures.

pub mod analyzers;
pub mod cluster;
pub mod digest;
pub mod document;
pub mod pipeline;
pub mod text;
pub mod types;
