use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Identifier for one article flowing through extraction and the digest
/// passes. Callers that track their own ids (feed item guid, URL hash)
/// supply them directly; otherwise the id is derived from content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Self {
        ArticleId(id.into())
    }

    /// Derive a stable content-hash id. Two byte-identical articles map to
    /// the same id regardless of where they were fetched from.
    pub fn from_content(content: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ArticleId(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
