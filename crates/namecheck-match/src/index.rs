//! Immutable lookup structures built from the master list.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::alternation::{Alternation, Boundary, Hit};
use crate::error::Result;
use crate::normalize::{normalize_with, strip_prefix, trailing_suffix};

/// Canonical names plus everything derived from them.
///
/// Built once per master list and never mutated; a new list means a new
/// index.
#[derive(Debug, Clone)]
pub struct MasterIndex {
    names: Vec<String>,
    name_set: HashSet<String>,
    /// Bare bodies in first-seen order.
    bare_names: Vec<String>,
    bare_to_canonical: HashMap<String, Vec<String>>,
    suffixes: HashSet<String>,
    min_bare_chars: usize,
    canonical_matcher: Alternation,
    bare_matcher: Alternation,
}

impl MasterIndex {
    /// Builds the index. Names are trimmed; blanks and repeats are skipped.
    pub fn build<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut name_set = HashSet::new();
        let mut bare_names = Vec::new();
        let mut bare_to_canonical: HashMap<String, Vec<String>> = HashMap::new();
        let mut suffixes = HashSet::new();

        for raw in names {
            let name = raw.as_ref().trim();
            if name.is_empty() || !name_set.insert(name.to_string()) {
                continue;
            }
            ordered.push(name.to_string());

            let bare = strip_prefix(name);
            if bare.is_empty() {
                continue;
            }
            if let Some((_, suffix)) = trailing_suffix(bare) {
                suffixes.insert(suffix.to_string());
            }
            let entry = bare_to_canonical.entry(bare.to_string()).or_insert_with(|| {
                bare_names.push(bare.to_string());
                Vec::new()
            });
            entry.push(name.to_string());
        }

        let min_bare_chars = bare_names
            .iter()
            .map(|b| b.chars().count())
            .min()
            .unwrap_or(0);
        let canonical_matcher = Alternation::build(&ordered, Boundary::None)?;
        let bare_matcher = Alternation::build(&bare_names, Boundary::Token)?;

        debug!(
            names = ordered.len(),
            bare_names = bare_names.len(),
            suffixes = suffixes.len(),
            min_bare_chars,
            "built master index"
        );

        Ok(Self {
            names: ordered,
            name_set,
            bare_names,
            bare_to_canonical,
            suffixes,
            min_bare_chars,
            canonical_matcher,
            bare_matcher,
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_set.contains(name)
    }

    /// Canonical names sharing `bare`, in insertion order.
    pub fn canonical_for(&self, bare: &str) -> Option<&[String]> {
        self.bare_to_canonical.get(bare).map(Vec::as_slice)
    }

    pub fn is_bare_name(&self, text: &str) -> bool {
        self.bare_to_canonical.contains_key(text)
    }

    /// Bare bodies with their canonical names, in first-seen order.
    pub fn bare_entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.bare_names.iter().map(|bare| {
            let officials = self
                .bare_to_canonical
                .get(bare)
                .map(Vec::as_slice)
                .unwrap_or_default();
            (bare.as_str(), officials)
        })
    }

    pub fn bare_names(&self) -> &[String] {
        &self.bare_names
    }

    pub fn suffixes(&self) -> &HashSet<String> {
        &self.suffixes
    }

    pub fn min_bare_chars(&self) -> usize {
        self.min_bare_chars
    }

    /// Strips the prefix and any trailing group that is not part of some
    /// canonical bare body.
    pub fn normalize(&self, text: &str) -> String {
        normalize_with(text, &self.suffixes)
    }

    /// Non-overlapping canonical-name hits, longest first at each position.
    pub fn find_canonical(&self, text: &str) -> Vec<Hit> {
        self.canonical_matcher.find_iter(text)
    }

    /// Non-overlapping bare-body hits delimited by non-token characters.
    pub fn find_bare(&self, text: &str) -> Vec<Hit> {
        self.bare_matcher.find_iter(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> MasterIndex {
        MasterIndex::build([
            "(민간)부산미음동물류",
            "(LH)오산세교",
            "(민간)오산세교",
            "(종심)성남복정1A",
            " (LH)오산세교 ",
            "",
            "(CM)광명학온(2공구)",
        ])
        .unwrap()
    }

    #[test]
    fn deduplicates_and_keeps_order() {
        let index = index();
        assert_eq!(index.len(), 5);
        assert_eq!(index.names()[1], "(LH)오산세교");
        assert_eq!(
            index.canonical_for("오산세교").unwrap(),
            &["(LH)오산세교".to_string(), "(민간)오산세교".to_string()]
        );
    }

    #[test]
    fn collects_bare_suffixes() {
        let index = index();
        assert!(index.suffixes().contains("(2공구)"));
        assert_eq!(index.normalize("광명학온(2공구)"), "광명학온(2공구)");
        assert_eq!(index.normalize("(CM)오산세교(LH)"), "오산세교");
    }

    #[test]
    fn min_bare_chars_counts_characters() {
        assert_eq!(index().min_bare_chars(), 4);
    }

    #[test]
    fn stacked_prefix_strips_one_group() {
        let index = MasterIndex::build(["(A)(B)성남복정"]).unwrap();
        assert!(index.is_bare_name("(B)성남복정"));
        assert!(!index.is_bare_name("성남복정"));
        assert_eq!(index.find_canonical("보고 (A)(B)성남복정").len(), 1);
    }

    #[test]
    fn empty_index_never_matches() {
        let index = MasterIndex::build(Vec::<String>::new()).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.min_bare_chars(), 0);
        assert!(index.find_canonical("(LH)오산세교").is_empty());
        assert!(index.find_bare("오산세교").is_empty());
    }
}
