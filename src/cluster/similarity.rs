use std::collections::{BTreeMap, HashSet};

use crate::cluster::union_find::UnionFind;

/// Jaccard similarity `|A ∩ B| / |A ∪ B|` between two content-word sets.
///
/// Symmetric, bounded in [0.0, 1.0], 1.0 for identical non-empty sets, and
/// 0.0 whenever either side is empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    intersection as f32 / union as f32
}

/// Asymmetric overlap: the share of `needle`'s words already present in
/// `haystack`. The circular-quote check uses this rather than Jaccard
/// because only the quote's own coverage matters — a short quote restating
/// part of a long sentence is still circular.
pub fn containment(needle: &HashSet<String>, haystack: &HashSet<String>) -> f32 {
    if needle.is_empty() {
        return 0.0;
    }

    let overlap = needle.intersection(haystack).count();
    overlap as f32 / needle.len() as f32
}

/// Group candidates whose pairwise Jaccard similarity meets `threshold`
/// into transitive merge clusters.
///
/// The result contains only clusters with at least two members, each
/// sorted ascending; candidates that matched nothing are simply absent.
/// Empty and singleton candidate sets yield no clusters — never an error.
/// Clustering is transitive: if a~b and b~c clear the threshold, all three
/// land in one cluster even when sim(a, c) alone would not.
pub fn cluster_by_similarity(word_sets: &[HashSet<String>], threshold: f32) -> Vec<Vec<usize>> {
    if word_sets.len() < 2 {
        return Vec::new();
    }

    let mut uf = UnionFind::new(word_sets.len());
    for i in 0..word_sets.len() {
        for j in (i + 1)..word_sets.len() {
            if jaccard(&word_sets[i], &word_sets[j]) >= threshold {
                uf.union(i, j);
            }
        }
    }

    // Group by root. BTreeMap plus ascending insertion keeps both the
    // cluster list and each cluster's members deterministically ordered.
    let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for i in 0..word_sets.len() {
        groups.entry(uf.find(i)).or_default().push(i);
    }

    let mut clusters: Vec<Vec<usize>> = groups.into_values().filter(|g| g.len() > 1).collect();
    clusters.sort_by_key(|g| g[0]);
    clusters
}
