//! Project-name matching against a canonical master list.
//!
//! [`MasterIndex`] holds the immutable lookup structures. [`NameMatcher`]
//! pairs an index with [`MatchOptions`] and a similarity cache, and
//! provides [`NameMatcher::find_all_in_text`] (candidate location) and
//! [`NameMatcher::check`] (classification).

pub mod alternation;
mod classifier;
pub mod error;
pub mod index;
mod locator;
pub mod matcher;
pub mod normalize;
pub mod options;
pub mod similarity;

pub use alternation::Hit;
pub use error::{MatchError, Result};
pub use index::MasterIndex;
pub use locator::extract_prefixed_candidate;
pub use matcher::{EXCLUDED_WORDS, NameMatcher};
pub use options::MatchOptions;
pub use similarity::{BestMatch, SimilarityCache, ratio};
