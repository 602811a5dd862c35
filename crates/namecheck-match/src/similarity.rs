//! Gestalt pattern matching (Ratcliff/Obershelp) similarity.

use std::collections::HashMap;
use std::sync::Mutex;

/// Similarity ratio in `[0, 1]`: `2·M / (|a| + |b|)` over Unicode scalar
/// values, where `M` is the size of all matching blocks.
///
/// Matching blocks are found by taking the longest common substring
/// (earliest in `a`, then earliest in `b` on ties) and recursing on the
/// pieces to its left and right. Two empty strings are identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matching_chars(&a, &b);
    (2 * matched) as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            queue.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // Run length ending at (i - 1, j - 1), indexed by j - blo.
    let mut prev = vec![0usize; bhi - blo + 1];
    let mut curr = vec![0usize; bhi - blo + 1];
    for i in alo..ahi {
        for j in blo..bhi {
            let slot = j - blo + 1;
            if a[i] == b[j] {
                let size = prev[slot - 1] + 1;
                curr[slot] = size;
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            } else {
                curr[slot] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    (best_i, best_j, best_size)
}

/// Best-scoring canonical name for a normalised string.
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    pub official: String,
    pub score: f64,
}

/// Memoised best matches, keyed by normalised input.
///
/// Owned by one matcher; safe to share across threads.
#[derive(Debug, Default)]
pub struct SimilarityCache {
    entries: Mutex<HashMap<String, Option<BestMatch>>>,
}

impl SimilarityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_insert_with(
        &self,
        key: &str,
        compute: impl FnOnce() -> Option<BestMatch>,
    ) -> Option<BestMatch> {
        if let Some(hit) = self.lock().get(key) {
            return hit.clone();
        }
        // Computed outside the lock; a racing thread computes the same value.
        let value = compute();
        self.lock().insert(key.to_string(), value.clone());
        value
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Option<BestMatch>>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
