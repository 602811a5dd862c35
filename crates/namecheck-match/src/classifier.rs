//! Verdicts for single candidate strings.

use namecheck_model::{AmbiguityReason, CheckResult, Issue, QualifierProblem};

use crate::matcher::NameMatcher;
use crate::normalize::{leading_prefix, strip_prefix, trailing_suffix};

impl NameMatcher {
    /// Classifies one candidate. `None` means the text is not a project
    /// name at all.
    ///
    /// Rules, first hit wins:
    /// 1. exact canonical name;
    /// 2. normalised text is a known bare body (qualifier problems, or
    ///    ambiguity when several canonical names share it);
    /// 3. containment against bare bodies (incomplete name, or ambiguity);
    /// 4. similarity at or above the threshold (typo).
    pub fn check(&self, text: &str) -> Option<CheckResult> {
        let text = text.trim();
        if text.is_empty() || self.is_excluded(text) {
            return None;
        }
        if self.index.contains(text) {
            return Some(CheckResult::matched(text));
        }

        let normalized = self.index.normalize(text);
        let input_prefix = leading_prefix(text);

        if let Some(officials) = self.index.canonical_for(&normalized) {
            if let [official] = officials {
                let issue = describe_mismatch(text, input_prefix, official);
                return Some(CheckResult::mismatch(text, official.clone(), issue));
            }
            let Some(prefix) = input_prefix else {
                return Some(CheckResult::ambiguous(
                    text,
                    officials.to_vec(),
                    AmbiguityReason::PrefixMissing,
                ));
            };
            let expected = format!("{prefix}{normalized}");
            return Some(match officials.iter().find(|o| **o == expected) {
                Some(official) => {
                    let issue = describe_mismatch(text, input_prefix, official);
                    CheckResult::mismatch(text, official.clone(), issue)
                }
                None => CheckResult::ambiguous(
                    text,
                    officials.to_vec(),
                    AmbiguityReason::PrefixConflict,
                ),
            });
        }

        let containing = self.containing_matches(&normalized);
        match containing.as_slice() {
            [] => {}
            [official] => {
                let bare = strip_prefix(official);
                // At most `typo_tolerance_chars` stray characters after a
                // full bare body read as a typo rather than an incomplete
                // name.
                let likely_typo = normalized.starts_with(bare)
                    && normalized.chars().count() - bare.chars().count()
                        <= self.options.typo_tolerance_chars;
                if !likely_typo {
                    return Some(CheckResult::mismatch(
                        text,
                        official.clone(),
                        Issue::Incomplete {
                            official: official.clone(),
                        },
                    ));
                }
            }
            _ => {
                return Some(CheckResult::ambiguous(
                    text,
                    containing,
                    AmbiguityReason::Containment,
                ));
            }
        }

        let best = self.best_similarity(&normalized)?;
        if best.score >= self.options.similarity_threshold {
            let issue = Issue::Typo {
                similarity: best.score,
                official: best.official.clone(),
            };
            return Some(CheckResult::mismatch(text, best.official, issue));
        }
        None
    }
}

/// Explains why `original` differs from `official` when both share a bare
/// body.
fn describe_mismatch(original: &str, input_prefix: Option<&str>, official: &str) -> Issue {
    let mut problems = Vec::new();
    let official_prefix = leading_prefix(official).unwrap_or_default();
    match input_prefix {
        None => problems.push(QualifierProblem::PrefixMissing),
        Some(found) if found != official_prefix => {
            problems.push(QualifierProblem::PrefixMismatch {
                found: found.to_string(),
                expected: official_prefix.to_string(),
            });
        }
        Some(_) => {}
    }
    if let Some((_, suffix)) = trailing_suffix(strip_prefix(original))
        && !strip_prefix(official).ends_with(suffix)
    {
        problems.push(QualifierProblem::UnnecessarySuffix {
            suffix: suffix.to_string(),
        });
    }
    // Only spacing differs; report it as the qualifier being off.
    if problems.is_empty() {
        problems.push(QualifierProblem::PrefixMissing);
    }
    Issue::Qualifier {
        problems,
        official: official.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> NameMatcher {
        NameMatcher::from_names([
            "(민간)부산미음동물류",
            "(LH)오산세교",
            "(민간)오산세교",
            "(종심)성남복정1A",
            "(자체.시행)성남복정3BL",
            "(CM)광명학온(2공구)",
        ])
        .unwrap()
    }

    #[test]
    fn exact_name_matches() {
        let result = matcher().check(" (LH)오산세교 ").unwrap();
        assert!(result.is_match());
        assert_eq!(result.suggestion(), "(LH)오산세교");
        assert_eq!(result.issue, Issue::None);
    }

    #[test]
    fn wrong_prefix_and_noise_suffix() {
        let result = matcher().check("(CM)부산미음동물류(LH)").unwrap();
        assert_eq!(result.suggestion(), "(민간)부산미음동물류");
        assert_eq!(
            result.issue.to_string(),
            "접두어 불일치 ((CM)→(민간)) + 불필요한 후미 (LH) → 공식: (민간)부산미음동물류"
        );
    }

    #[test]
    fn shared_bare_with_matching_prefix_reports_suffix() {
        let result = matcher().check("(LH)오산세교(시공)").unwrap();
        assert_eq!(result.suggestion(), "(LH)오산세교");
        assert_eq!(result.issue.to_string(), "불필요한 후미 (시공) → 공식: (LH)오산세교");
    }

    #[test]
    fn shared_bare_with_unknown_prefix_is_a_conflict() {
        let result = matcher().check("(CM)오산세교").unwrap();
        assert_eq!(
            result.issue,
            Issue::Ambiguous {
                reason: AmbiguityReason::PrefixConflict,
                candidates: vec!["(LH)오산세교".to_string(), "(민간)오산세교".to_string()],
            }
        );
    }

    #[test]
    fn kept_suffix_is_part_of_the_name() {
        let result = matcher().check("광명학온(2공구)").unwrap();
        assert_eq!(result.suggestion(), "(CM)광명학온(2공구)");
        assert_eq!(result.issue.reason(), "접두어 누락");
    }

    #[test]
    fn one_extra_character_is_a_typo() {
        let result = matcher().check("성남복정1A1").unwrap();
        assert_eq!(result.suggestion(), "(종심)성남복정1A");
        assert!(matches!(result.issue, Issue::Typo { .. }));
    }

    #[test]
    fn truncated_name_is_incomplete() {
        let result = matcher().check("성남복정3").unwrap();
        assert_eq!(
            result.issue,
            Issue::Incomplete {
                official: "(자체.시행)성남복정3BL".to_string()
            }
        );
    }

    #[test]
    fn unrelated_text_is_ignored() {
        assert!(matcher().check("주간 공정 회의").is_none());
        assert!(matcher().check("비고").is_none());
    }
}
