//! Library surface of the `namecheck` command-line tool.

pub mod config;
pub mod logging;
