use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Factual,
    Statistical,
    Quote,
    Attribution,
}

/// How the claim's source relates to the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Unknown,
    Quoted,
    Primary,
}

/// A short falsifiable statement extracted from one sentence.
///
/// `sentence_index` is a non-owning back-reference into the document's
/// sentence sequence (the stable original position, not a position in the
/// compressed output).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub text: String,
    pub claim_type: ClaimType,

    pub source: Option<String>,
    pub source_kind: SourceKind,

    /// Confidence in [0.0, 1.0], rounded to two decimals.
    pub confidence: f32,

    pub sentence_index: usize,
}
