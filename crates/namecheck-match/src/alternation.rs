//! Multi-pattern name search.
//!
//! Both matchers report non-overlapping hits scanning left to right, taking
//! the longest alternative at each start position. The token-bounded
//! variant additionally rejects hits that sit inside a longer run of token
//! characters.

use aho_corasick::{AhoCorasick, MatchKind};

use crate::error::Result;
use crate::normalize::is_token_char;

/// A single hit in a haystack. Offsets are in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Whether hits must be delimited by non-token characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    None,
    Token,
}

#[derive(Debug, Clone)]
pub struct Alternation {
    automaton: Option<AhoCorasick>,
    boundary: Boundary,
}

impl Alternation {
    /// Builds a matcher. Empty patterns are ignored; with no patterns left
    /// the matcher never matches.
    pub fn build<I, P>(patterns: I, boundary: Boundary) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        if patterns.is_empty() {
            return Ok(Self {
                automaton: None,
                boundary,
            });
        }
        let kind = match boundary {
            Boundary::None => MatchKind::LeftmostLongest,
            // Boundary checks need every candidate at a position, not just
            // the longest one.
            Boundary::Token => MatchKind::Standard,
        };
        let automaton = AhoCorasick::builder().match_kind(kind).build(&patterns)?;
        Ok(Self {
            automaton: Some(automaton),
            boundary,
        })
    }

    pub fn find_iter(&self, haystack: &str) -> Vec<Hit> {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };
        match self.boundary {
            Boundary::None => automaton
                .find_iter(haystack)
                .map(|m| hit(haystack, m.start(), m.end()))
                .collect(),
            Boundary::Token => {
                let mut spans: Vec<(usize, usize)> = automaton
                    .find_overlapping_iter(haystack)
                    .map(|m| (m.start(), m.end()))
                    .filter(|&(start, end)| token_bounded(haystack, start, end))
                    .collect();
                spans.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

                let mut hits = Vec::new();
                let mut cursor = 0;
                for (start, end) in spans {
                    if start < cursor {
                        continue;
                    }
                    hits.push(hit(haystack, start, end));
                    cursor = end;
                }
                hits
            }
        }
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        !self.find_iter(haystack).is_empty()
    }
}

fn hit(haystack: &str, start: usize, end: usize) -> Hit {
    Hit {
        start,
        end,
        text: haystack[start..end].to_string(),
    }
}

/// True when `haystack[start..end]` is not glued to neighbouring token
/// characters.
fn token_bounded(haystack: &str, start: usize, end: usize) -> bool {
    let before = haystack[..start].chars().next_back();
    let after = haystack[end..].chars().next();
    !before.is_some_and(is_token_char) && !after.is_some_and(is_token_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_longest_alternative() {
        let alt = Alternation::build(["성남복정", "성남복정1A"], Boundary::None).unwrap();
        let hits = alt.find_iter("xx 성남복정1A yy");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "성남복정1A");
    }

    #[test]
    fn token_boundary_rejects_embedded_hits() {
        let alt = Alternation::build(["성남복정"], Boundary::Token).unwrap();
        assert!(alt.find_iter("성남복정1A").is_empty());
        let hits = alt.find_iter("(CM)성남복정 현장");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "성남복정");
    }

    #[test]
    fn token_boundary_falls_back_to_shorter_alternative() {
        // The longer pattern is glued to a trailing token char, the shorter
        // one ends at a delimiter.
        let alt = Alternation::build(["오산세교", "오산세교2"], Boundary::Token).unwrap();
        let hits = alt.find_iter("오산세교 오산세교2 오산세교2B");
        let texts: Vec<_> = hits.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["오산세교", "오산세교2"]);
    }

    #[test]
    fn empty_pattern_list_never_matches() {
        let alt = Alternation::build(Vec::<String>::new(), Boundary::Token).unwrap();
        assert!(!alt.is_match("anything"));
        let alt = Alternation::build([""], Boundary::None).unwrap();
        assert!(!alt.is_match("anything"));
    }

    #[test]
    fn hits_do_not_overlap() {
        let alt = Alternation::build(["ab", "bc"], Boundary::None).unwrap();
        let hits = alt.find_iter("abc");
        assert_eq!(hits.len(), 1);
        assert_eq!((hits[0].start, hits[0].end), (0, 2));
    }
}
