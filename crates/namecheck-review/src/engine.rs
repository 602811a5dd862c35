//! Review of one document's text against the master index.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use namecheck_ingest::Extractor;
use namecheck_match::{NameMatcher, extract_prefixed_candidate};
use namecheck_model::{CheckResult, FileReviewResult, TextPair};
use rayon::prelude::*;
use tracing::{debug, info, trace, warn};

use crate::fragments::FragmentMap;

/// Canonical hits sort before bare hits at the same offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HitKind {
    Canonical,
    Bare,
}

#[derive(Debug)]
struct MatchEvent {
    offset: usize,
    kind: HitKind,
    candidate: String,
    fragment: usize,
}

/// Reviews documents with one shared matcher.
#[derive(Debug, Clone)]
pub struct ReviewEngine {
    matcher: Arc<NameMatcher>,
}

impl ReviewEngine {
    pub fn new(matcher: Arc<NameMatcher>) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &NameMatcher {
        &self.matcher
    }

    /// Reviews already extracted text for the file at `path`.
    ///
    /// Names are searched across the joined text first; fragments without a
    /// hit that are short enough get a second, fuzzier pass. Each distinct
    /// candidate is classified once and repeated mismatches collect their
    /// locations.
    pub fn review_pairs(&self, path: &Path, pairs: &[TextPair]) -> FileReviewResult {
        let fragments = FragmentMap::build(pairs);
        let mut collector = Collector::new(&self.matcher);

        if !fragments.is_empty() {
            let index = self.matcher.index();
            let mut covered = vec![false; fragments.fragments().len()];
            let mut events = Vec::new();

            for hit in index.find_canonical(fragments.text()) {
                let Some(idx) = fragments.locate(hit.start) else {
                    continue;
                };
                covered[idx] = true;
                events.push(MatchEvent {
                    offset: hit.start,
                    kind: HitKind::Canonical,
                    candidate: hit.text,
                    fragment: idx,
                });
            }
            for hit in index.find_bare(fragments.text()) {
                let Some(idx) = fragments.locate(hit.start) else {
                    continue;
                };
                covered[idx] = true;
                let source = &fragments.fragments()[idx].text;
                let candidate = extract_prefixed_candidate(source, &hit.text).unwrap_or(hit.text);
                events.push(MatchEvent {
                    offset: hit.start,
                    kind: HitKind::Bare,
                    candidate,
                    fragment: idx,
                });
            }

            events.sort_by_key(|event| (event.offset, event.kind));
            for event in events {
                let location = &fragments.fragments()[event.fragment].location;
                collector.consume(event.candidate, location);
            }

            let max_chars = self.matcher.options().fallback_max_chars;
            for (fragment, _) in fragments
                .fragments()
                .iter()
                .zip(&covered)
                .filter(|(_, covered)| !**covered)
            {
                if fragment.text.chars().count() > max_chars {
                    continue;
                }
                for candidate in self.matcher.find_all_in_text(&fragment.text) {
                    collector.consume(candidate, &fragment.location);
                }
            }
        }

        let result = FileReviewResult::from_details(path, collector.finish());
        debug!(
            file = %result.file,
            fragments = fragments.fragments().len(),
            total = result.total,
            mismatched = result.mismatched,
            status = result.status.label(),
            "reviewed document"
        );
        result
    }

    /// Extracts and reviews one document. Extraction failures become an
    /// error result rather than an `Err`.
    pub fn review_document(&self, path: &Path, extractor: &dyn Extractor) -> FileReviewResult {
        match extractor.extract(path) {
            Ok(pairs) => self.review_pairs(path, &pairs),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "extraction failed");
                FileReviewResult::extraction_error(path, err.to_string())
            }
        }
    }

    /// Reviews documents in parallel. Results keep the input order.
    pub fn review_batch<P>(&self, paths: &[P], extractor: &dyn Extractor) -> Vec<FileReviewResult>
    where
        P: AsRef<Path> + Sync,
    {
        self.review_batch_with(paths, extractor, |_| {})
    }

    /// Like [`review_batch`](Self::review_batch), calling `on_done` as each
    /// file finishes (in completion order).
    pub fn review_batch_with<P, F>(
        &self,
        paths: &[P],
        extractor: &dyn Extractor,
        on_done: F,
    ) -> Vec<FileReviewResult>
    where
        P: AsRef<Path> + Sync,
        F: Fn(&FileReviewResult) + Sync,
    {
        let started = Instant::now();
        let results: Vec<FileReviewResult> = paths
            .par_iter()
            .map(|path| {
                let result = self.review_document(path.as_ref(), extractor);
                on_done(&result);
                result
            })
            .collect();
        info!(
            files = results.len(),
            cached_similarities = self.matcher.cached_similarities(),
            duration_ms = started.elapsed().as_millis() as u64,
            "batch review complete"
        );
        results
    }
}

/// Classifies each distinct candidate once and merges locations.
struct Collector<'a> {
    matcher: &'a NameMatcher,
    results: Vec<CheckResult>,
    /// Candidate text to its position in `results`; `None` when ignored.
    seen: HashMap<String, Option<usize>>,
}

impl<'a> Collector<'a> {
    fn new(matcher: &'a NameMatcher) -> Self {
        Self {
            matcher,
            results: Vec::new(),
            seen: HashMap::new(),
        }
    }

    fn consume(&mut self, candidate: String, location: &str) {
        if let Some(slot) = self.seen.get(&candidate) {
            // Matches are reported once; mismatches gather every location.
            if let Some(idx) = *slot {
                let existing = &mut self.results[idx];
                if existing.is_mismatch() {
                    existing.add_location(location);
                }
            }
            return;
        }

        let slot = self.matcher.check(&candidate).map(|result| {
            trace!(
                candidate = %candidate,
                location,
                status = result.status.label(),
                reason = %result.issue.reason(),
                "classified candidate"
            );
            self.results.push(result.with_location(location));
            self.results.len() - 1
        });
        self.seen.insert(candidate, slot);
    }

    fn finish(self) -> Vec<CheckResult> {
        self.results
    }
}
