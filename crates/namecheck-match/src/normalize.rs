//! Prefix and suffix handling for project names.
//!
//! A canonical name looks like `(qualifier)bare body`, where the bare body
//! may itself end in a `(...)` group. Stripping is a pure function of the
//! string and never depends on match context.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Leading group, empty parentheses included.
static PREFIX_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\([^)]*\)").expect("valid prefix regex"));

/// Leading group with at least one character inside.
static PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\([^)]+\)").expect("valid prefix regex"));

static SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]+\)$").expect("valid suffix regex"));

/// Returns true for characters that make up a token: ASCII letters and
/// digits plus precomposed Hangul syllables.
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('가'..='힣').contains(&c)
}

/// Removes one leading `(...)` group and trims the remainder.
pub fn strip_prefix(name: &str) -> &str {
    match PREFIX_STRIP_RE.find(name) {
        Some(m) => name[m.end()..].trim(),
        None => name.trim(),
    }
}

/// The leading `(...)` group including parentheses, if present.
pub fn leading_prefix(name: &str) -> Option<&str> {
    PREFIX_RE.find(name).map(|m| m.as_str())
}

/// The trailing `(...)` group and its byte offset, if present.
pub fn trailing_suffix(text: &str) -> Option<(usize, &str)> {
    SUFFIX_RE.find(text).map(|m| (m.start(), m.as_str()))
}

/// Strips the prefix and any trailing group that is not a known suffix.
///
/// Applied until nothing changes, so the result is a fixed point:
/// `(A)(B)name(LH)(시공)` and `name` normalise to the same string.
pub fn normalize_with(text: &str, known_suffixes: &HashSet<String>) -> String {
    let mut current = text.to_string();
    loop {
        let next = normalize_once(&current, known_suffixes);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_once(text: &str, known_suffixes: &HashSet<String>) -> String {
    let stripped = strip_prefix(text);
    match trailing_suffix(stripped) {
        Some((start, suffix)) if !known_suffixes.contains(suffix) => {
            stripped[..start].trim().to_string()
        }
        _ => stripped.to_string(),
    }
}
