//! Error types for matcher construction.

use thiserror::Error;

/// Errors raised while building a matcher.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid option {name}: {message}")]
    InvalidOption { name: &'static str, message: String },

    #[error("failed to build name automaton: {0}")]
    Automaton(#[from] aho_corasick::BuildError),
}

pub type Result<T> = std::result::Result<T, MatchError>;
