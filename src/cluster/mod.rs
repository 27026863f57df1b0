//! The generic similarity-clustering primitive.
//!
//! Three call sites share this module at different granularities: the
//! repetition collapser (sentence vs. sentence across a whole document),
//! the quote isolator (quote span vs. a recent-sentence window, pairwise
//! only), and the cross-document deduplicator (article vs. article).

pub mod similarity;
pub mod union_find;

pub use similarity::{cluster_by_similarity, containment, jaccard};
pub use union_find::UnionFind;
