//! Finding project-name candidates inside a piece of text.

use crate::matcher::NameMatcher;
use crate::normalize::is_token_char;

impl NameMatcher {
    /// Candidate strings in `text`, in order of discovery without repeats.
    ///
    /// Whole-text hits return the text itself. Otherwise canonical names
    /// found inside the text come first, then token-bounded bare bodies
    /// (recovering a `(prefix)` written in front of them). Containment and
    /// similarity are only tried when nothing else matched, and then
    /// propose the whole text. Text shorter than every bare body yields
    /// nothing.
    pub fn find_all_in_text(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if self.is_excluded(text) {
            return Vec::new();
        }
        let index = &self.index;

        if index.contains(text) || index.is_bare_name(text) {
            return vec![text.to_string()];
        }
        let normalized = index.normalize(text);
        if normalized != text && index.is_bare_name(&normalized) {
            return vec![text.to_string()];
        }
        if text.chars().count() < index.min_bare_chars() {
            return Vec::new();
        }

        let mut found: Vec<String> = Vec::new();
        for hit in index.find_canonical(text) {
            push_unique(&mut found, hit.text);
        }
        for hit in index.find_bare(text) {
            let Some(officials) = index.canonical_for(&hit.text) else {
                continue;
            };
            if officials.iter().any(|official| found.contains(official)) {
                continue;
            }
            let candidate = extract_prefixed_candidate(text, &hit.text).unwrap_or(hit.text);
            push_unique(&mut found, candidate);
        }

        if found.is_empty() {
            if !self.containing_matches(&normalized).is_empty() {
                return vec![text.to_string()];
            }
            let threshold = self.options.similarity_threshold;
            if self
                .best_similarity(&normalized)
                .is_some_and(|best| best.score >= threshold)
            {
                return vec![text.to_string()];
            }
        }
        found
    }
}

fn push_unique(found: &mut Vec<String>, candidate: String) {
    if !found.contains(&candidate) {
        found.push(candidate);
    }
}

/// Finds the first `(prefix)bare` occurrence in `text`, allowing
/// whitespace between the group and the bare body, and returns it verbatim.
///
/// The bare body must not be followed by a token character.
pub fn extract_prefixed_candidate(text: &str, bare: &str) -> Option<String> {
    if bare.is_empty() {
        return None;
    }
    for (open, _) in text.match_indices('(') {
        let Some(close) = text[open + 1..].find(')').map(|i| open + 1 + i) else {
            break;
        };
        if close == open + 1 {
            continue;
        }
        let after_group = &text[close + 1..];
        let body_start = close + 1 + (after_group.len() - after_group.trim_start().len());
        let body_end = body_start + bare.len();
        if text[body_start..].starts_with(bare) && token_bounded_right(text, body_end) {
            return Some(text[open..body_end].trim().to_string());
        }
    }
    None
}

fn token_bounded_right(text: &str, end: usize) -> bool {
    !text[end..].chars().next().is_some_and(is_token_char)
}
