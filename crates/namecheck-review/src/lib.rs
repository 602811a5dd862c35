//! Per-file project-name review.
//!
//! [`ReviewEngine`] joins a document's text fragments, finds canonical and
//! bare names across the joined text, falls back to fuzzy location on
//! fragments without a hit, and aggregates verdicts into a
//! [`FileReviewResult`](namecheck_model::FileReviewResult).

pub mod engine;
pub mod fragments;

pub use engine::ReviewEngine;
pub use fragments::{Fragment, FragmentMap};
