pub mod issue;
pub mod result;
pub mod text;

pub use issue::{AmbiguityReason, Issue, QualifierProblem};
pub use result::{CheckResult, CheckStatus, FileReviewResult, ReviewStatus, ReviewSummary};
pub use text::TextPair;
