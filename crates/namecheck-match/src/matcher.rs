//! Shared matcher state used by the locator and the classifier.

use std::sync::Arc;

use crate::error::Result;
use crate::index::MasterIndex;
use crate::options::MatchOptions;
use crate::similarity::{BestMatch, SimilarityCache, ratio};

/// Header words and labels that are never project names.
pub const EXCLUDED_WORDS: &[&str] = &[
    "공사명",
    "사업명",
    "현장명",
    "프로젝트명",
    "프로젝트",
    "일치여부",
    "일치",
    "불일치",
    "판정",
    "결과",
    "공사명칭",
    "명칭",
    "비고",
    "구분",
    "번호",
    "No",
    "no",
    "NO",
    "합계",
    "소계",
    "총계",
];

/// Locates and classifies project names against one master index.
///
/// Cheap to share: the index sits behind an `Arc` and the similarity
/// cache is internally synchronised.
#[derive(Debug)]
pub struct NameMatcher {
    pub(crate) index: Arc<MasterIndex>,
    pub(crate) options: MatchOptions,
    cache: SimilarityCache,
}

impl NameMatcher {
    pub fn new(index: Arc<MasterIndex>) -> Self {
        Self {
            index,
            options: MatchOptions::default(),
            cache: SimilarityCache::new(),
        }
    }

    pub fn with_options(index: Arc<MasterIndex>, options: MatchOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            index,
            options,
            cache: SimilarityCache::new(),
        })
    }

    /// Builds an index from `names` with default options.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(Arc::new(MasterIndex::build(names)?)))
    }

    pub fn index(&self) -> &MasterIndex {
        &self.index
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Number of memoised similarity lookups.
    pub fn cached_similarities(&self) -> usize {
        self.cache.len()
    }

    /// True for header words, very short strings and numbers.
    pub fn is_excluded(&self, text: &str) -> bool {
        let clean = text.trim();
        if EXCLUDED_WORDS.contains(&clean) {
            return true;
        }
        if clean.chars().count() < self.options.min_candidate_chars {
            return true;
        }
        let mut digits = clean.chars().filter(|c| !matches!(c, ' ' | '-' | '.')).peekable();
        digits.peek().is_some() && digits.all(char::is_numeric)
    }

    /// Canonical names whose bare body starts with `normalized` or is a
    /// leading part of it.
    pub fn containing_matches(&self, normalized: &str) -> Vec<String> {
        let min_chars = self.options.min_containment_chars;
        if normalized.chars().count() < min_chars {
            return Vec::new();
        }
        self.index
            .bare_entries()
            .filter(|(bare, _)| bare.chars().count() >= min_chars)
            .filter(|(bare, _)| bare.starts_with(normalized) || normalized.starts_with(bare))
            .flat_map(|(_, officials)| officials.iter().cloned())
            .collect()
    }

    /// Highest similarity against any bare body, with the first canonical
    /// name of that body. The first body wins ties.
    pub fn best_similarity(&self, normalized: &str) -> Option<BestMatch> {
        self.cache.get_or_insert_with(normalized, || {
            let mut best: Option<BestMatch> = None;
            for (bare, officials) in self.index.bare_entries() {
                let score = ratio(normalized, bare);
                let current = best.as_ref().map_or(0.0, |b| b.score);
                if score > current
                    && let Some(official) = officials.first()
                {
                    best = Some(BestMatch {
                        official: official.clone(),
                        score,
                    });
                }
            }
            best
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> NameMatcher {
        NameMatcher::from_names(["(종심)성남복정1A", "(자체.시행)성남복정3BL", "(민간)부산미음동물류"])
            .unwrap()
    }

    #[test]
    fn excludes_headers_short_strings_and_numbers() {
        let matcher = matcher();
        assert!(matcher.is_excluded("공사명"));
        assert!(matcher.is_excluded(" NO "));
        assert!(matcher.is_excluded("AB"));
        assert!(matcher.is_excluded("2024-01-15"));
        assert!(matcher.is_excluded("1 234.5"));
        assert!(matcher.is_excluded("１２３４"));
        assert!(!matcher.is_excluded("---"));
        assert!(!matcher.is_excluded("성남복정"));
    }

    #[test]
    fn containment_runs_both_ways() {
        let matcher = matcher();
        assert_eq!(
            matcher.containing_matches("성남복정"),
            vec!["(종심)성남복정1A".to_string(), "(자체.시행)성남복정3BL".to_string()]
        );
        assert_eq!(
            matcher.containing_matches("성남복정1A1"),
            vec!["(종심)성남복정1A".to_string()]
        );
        assert!(matcher.containing_matches("성남").is_empty());
    }

    #[test]
    fn best_similarity_is_cached() {
        let matcher = matcher();
        let best = matcher.best_similarity("부산미음동물").unwrap();
        assert_eq!(best.official, "(민간)부산미음동물류");
        assert!((best.score - 12.0 / 13.0).abs() < 1e-12);
        assert_eq!(matcher.cached_similarities(), 1);
        matcher.best_similarity("부산미음동물");
        assert_eq!(matcher.cached_similarities(), 1);
    }

    #[test]
    fn rejects_invalid_options() {
        let index = Arc::new(MasterIndex::build(["(a)abcd"]).unwrap());
        let options = MatchOptions::new().with_similarity_threshold(-0.1);
        assert!(NameMatcher::with_options(index, options).is_err());
    }
}
