//! Structured mismatch descriptions.
//!
//! Every mismatch carries an [`Issue`] whose variant holds only the data it
//! needs. The `Display` rendering follows the report wording reviewers are
//! used to: a reason, then ` → ` and the recommendation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between the reason and the recommendation in rendered issues.
pub const RECOMMENDATION_SEPARATOR: &str = " → ";

/// Separator used when several candidate names are listed on one line.
pub const CANDIDATE_SEPARATOR: &str = " / ";

/// A qualifier defect found on an otherwise recognised name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualifierProblem {
    /// The reported text has no leading `(...)` prefix.
    PrefixMissing,
    /// The reported prefix differs from the canonical one.
    PrefixMismatch { found: String, expected: String },
    /// The reported text ends in a `(...)` group the canonical name lacks.
    UnnecessarySuffix { suffix: String },
}

impl fmt::Display for QualifierProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrefixMissing => f.write_str("접두어 누락"),
            Self::PrefixMismatch { found, expected } => {
                write!(f, "접두어 불일치 ({found}→{expected})")
            }
            Self::UnnecessarySuffix { suffix } => write!(f, "불필요한 후미 {suffix}"),
        }
    }
}

/// Why a name could not be pinned to a single canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmbiguityReason {
    /// Several canonical names share the bare body and no prefix was given.
    PrefixMissing,
    /// Several canonical names share the bare body and the given prefix
    /// matches none of them.
    PrefixConflict,
    /// The text is a partial form of several different bare bodies.
    Containment,
}

impl AmbiguityReason {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PrefixMissing => "접두어 누락",
            Self::PrefixConflict => "접두어 불일치",
            Self::Containment => "특정불가",
        }
    }
}

/// Mismatch description - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Issue {
    /// No issue (exact match).
    None,
    /// Bare body recognised, qualifiers wrong.
    Qualifier {
        problems: Vec<QualifierProblem>,
        official: String,
    },
    /// The text is a truncated or extended form of one bare body.
    Incomplete { official: String },
    /// Accepted on string similarity alone.
    Typo { similarity: f64, official: String },
    /// More than one canonical name fits.
    Ambiguous {
        reason: AmbiguityReason,
        candidates: Vec<String>,
    },
}

impl Issue {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }

    /// Human-readable reason, without the recommendation.
    pub fn reason(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Qualifier { problems, .. } => problems
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" + "),
            Self::Incomplete { .. } => "명칭 불완전".to_string(),
            Self::Typo { similarity, .. } => {
                format!("오탈자 추정 (유사도 {:.0}%)", similarity * 100.0)
            }
            Self::Ambiguous { reason, candidates } => match reason {
                AmbiguityReason::Containment => {
                    format!("{} (유사 {}건)", reason.label(), candidates.len())
                }
                _ => reason.label().to_string(),
            },
        }
    }

    /// The recommended canonical name(s), if the issue carries any.
    pub fn recommendation(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Qualifier { official, .. }
            | Self::Incomplete { official }
            | Self::Typo { official, .. } => Some(format!("공식: {official}")),
            Self::Ambiguous { reason, candidates } => match reason {
                AmbiguityReason::Containment => Some(
                    candidates
                        .iter()
                        .enumerate()
                        .map(|(idx, name)| format!("  {}. {name}", idx + 1))
                        .collect::<Vec<_>>()
                        .join("\n"),
                ),
                _ => Some(format!("후보: {}", candidates.join(CANDIDATE_SEPARATOR))),
            },
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = self.reason();
        match (self, self.recommendation()) {
            (_, None) => f.write_str(&reason),
            // Enumerated candidate lists go on their own lines.
            (
                Self::Ambiguous {
                    reason: AmbiguityReason::Containment,
                    ..
                },
                Some(list),
            ) => write!(f, "{reason}:\n{list}"),
            (_, Some(recommendation)) => {
                write!(f, "{reason}{RECOMMENDATION_SEPARATOR}{recommendation}")
            }
        }
    }
}
