//! Tunable heuristics for candidate location and classification.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Thresholds used by the locator and the classifier.
///
/// The defaults reproduce the behaviour reviewers are used to. They were
/// tuned on a small set of weekly reports and may need adjusting for other
/// document sets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Minimum similarity ratio (inclusive) for a typo verdict.
    pub similarity_threshold: f64,
    /// A containment hit that overshoots the canonical bare body by at most
    /// this many characters is treated as a typo instead of an incomplete
    /// name.
    pub typo_tolerance_chars: usize,
    /// Both sides of a containment comparison need at least this many
    /// characters.
    pub min_containment_chars: usize,
    /// Strings shorter than this are never candidates.
    pub min_candidate_chars: usize,
    /// Fragments longer than this skip the fallback locator pass.
    pub fallback_max_chars: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.70,
            typo_tolerance_chars: 1,
            min_containment_chars: 4,
            min_candidate_chars: 3,
            fallback_max_chars: 80,
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_fallback_max_chars(mut self, chars: usize) -> Self {
        self.fallback_max_chars = chars;
        self
    }

    /// Rejects values the matcher cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(MatchError::InvalidOption {
                name: "similarity_threshold",
                message: format!("{} is outside [0, 1]", self.similarity_threshold),
            });
        }
        if self.min_candidate_chars == 0 {
            return Err(MatchError::InvalidOption {
                name: "min_candidate_chars",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = MatchOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.fallback_max_chars, 80);
    }

    #[test]
    fn rejects_threshold_above_one() {
        let options = MatchOptions::new().with_similarity_threshold(1.5);
        assert!(matches!(
            options.validate(),
            Err(MatchError::InvalidOption {
                name: "similarity_threshold",
                ..
            })
        ));
    }

    #[test]
    fn rejects_nan_threshold() {
        let options = MatchOptions::new().with_similarity_threshold(f64::NAN);
        assert!(options.validate().is_err());
    }
}
