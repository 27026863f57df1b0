pub mod claim;
pub mod identifiers;
pub mod result;
pub mod sentence;

pub use claim::{Claim, ClaimType, SourceKind};
pub use identifiers::ArticleId;
pub use result::{ExtractionResult, ExtractionStatistics, RemovedContent};
pub use sentence::{Entity, RemovalReason, Sentence, SentenceCategory};
