//! Classification verdicts and per-file review outcomes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::issue::{AmbiguityReason, CANDIDATE_SEPARATOR, Issue};

/// Verdict for a single candidate string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckStatus {
    Match,
    Mismatch,
}

impl CheckStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Match => "일치",
            Self::Mismatch => "불일치",
        }
    }
}

/// Outcome of classifying one candidate.
///
/// A mismatch always carries at least one suggestion. Ambiguous mismatches
/// carry every candidate canonical name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub input: String,
    pub status: CheckStatus,
    pub suggestions: Vec<String>,
    pub issue: Issue,
    /// Merged locations in first-seen order.
    #[serde(default)]
    pub locations: Vec<String>,
}

impl CheckResult {
    /// Exact match against a canonical name.
    pub fn matched(input: impl Into<String>) -> Self {
        let input = input.into();
        Self {
            suggestions: vec![input.clone()],
            input,
            status: CheckStatus::Match,
            issue: Issue::None,
            locations: Vec::new(),
        }
    }

    /// Mismatch with a single recommended canonical name.
    pub fn mismatch(input: impl Into<String>, official: impl Into<String>, issue: Issue) -> Self {
        Self {
            input: input.into(),
            status: CheckStatus::Mismatch,
            suggestions: vec![official.into()],
            issue,
            locations: Vec::new(),
        }
    }

    /// Mismatch that could not be narrowed to one canonical name.
    pub fn ambiguous(
        input: impl Into<String>,
        candidates: Vec<String>,
        reason: AmbiguityReason,
    ) -> Self {
        Self {
            input: input.into(),
            status: CheckStatus::Mismatch,
            suggestions: candidates.clone(),
            issue: Issue::Ambiguous { reason, candidates },
            locations: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.add_location(location);
        self
    }

    /// Records another location. Returns `false` when it was already known.
    pub fn add_location(&mut self, location: impl Into<String>) -> bool {
        let location = location.into();
        if self.locations.contains(&location) {
            return false;
        }
        self.locations.push(location);
        true
    }

    pub fn is_match(&self) -> bool {
        self.status == CheckStatus::Match
    }

    pub fn is_mismatch(&self) -> bool {
        self.status == CheckStatus::Mismatch
    }

    /// Suggestions rendered the way reports show them.
    pub fn suggestion(&self) -> String {
        self.suggestions.join(CANDIDATE_SEPARATOR)
    }

    /// Locations rendered as a single comma separated field.
    pub fn location(&self) -> String {
        self.locations.join(", ")
    }
}

/// Overall verdict for one reviewed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewStatus {
    /// No candidate produced a verdict.
    NoNamesFound,
    /// Every verdict was a match.
    Compliant,
    /// At least one mismatch.
    NeedsReview,
    /// Text could not be extracted.
    ExtractionError,
}

impl ReviewStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoNamesFound => "명칭없음",
            Self::Compliant => "적합",
            Self::NeedsReview => "검토필요",
            Self::ExtractionError => "오류",
        }
    }

    pub fn from_counts(total: usize, mismatched: usize) -> Self {
        if total == 0 {
            Self::NoNamesFound
        } else if mismatched == 0 {
            Self::Compliant
        } else {
            Self::NeedsReview
        }
    }

    /// True when a reviewer has to look at the file.
    pub fn needs_attention(&self) -> bool {
        matches!(self, Self::NeedsReview | Self::ExtractionError)
    }
}

/// Per-file aggregation of verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReviewResult {
    pub file: String,
    pub path: PathBuf,
    pub total: usize,
    pub matched: usize,
    pub mismatched: usize,
    pub status: ReviewStatus,
    pub details: Vec<CheckResult>,
    pub error: Option<String>,
}

impl FileReviewResult {
    pub fn from_details(path: impl AsRef<Path>, details: Vec<CheckResult>) -> Self {
        let path = path.as_ref();
        let matched = details.iter().filter(|d| d.is_match()).count();
        let mismatched = details.iter().filter(|d| d.is_mismatch()).count();
        let total = details.len();
        Self {
            file: file_name(path),
            path: path.to_path_buf(),
            total,
            matched,
            mismatched,
            status: ReviewStatus::from_counts(total, mismatched),
            details,
            error: None,
        }
    }

    pub fn extraction_error(path: impl AsRef<Path>, error: impl Into<String>) -> Self {
        let path = path.as_ref();
        Self {
            file: file_name(path),
            path: path.to_path_buf(),
            total: 0,
            matched: 0,
            mismatched: 0,
            status: ReviewStatus::ExtractionError,
            details: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &CheckResult> {
        self.details.iter().filter(|d| d.is_mismatch())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Grand totals across a batch of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub files: usize,
    pub total: usize,
    pub matched: usize,
    pub mismatched: usize,
    pub needs_review: usize,
    pub errors: usize,
}

impl ReviewSummary {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a FileReviewResult>) -> Self {
        results
            .into_iter()
            .fold(Self::default(), |mut summary, result| {
                summary.files += 1;
                summary.total += result.total;
                summary.matched += result.matched;
                summary.mismatched += result.mismatched;
                match result.status {
                    ReviewStatus::NeedsReview => summary.needs_review += 1,
                    ReviewStatus::ExtractionError => summary.errors += 1,
                    ReviewStatus::NoNamesFound | ReviewStatus::Compliant => {}
                }
                summary
            })
    }

    pub fn has_findings(&self) -> bool {
        self.needs_review > 0 || self.errors > 0
    }
}
