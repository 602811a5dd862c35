//! Optional TOML configuration for the review command.
//!
//! ```toml
//! master = "lists/official_names.csv"
//!
//! [matching]
//! similarity_threshold = 0.75
//! fallback_max_chars = 60
//! ```
//!
//! Paths are taken relative to the working directory. Command-line flags
//! override whatever the file sets.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use namecheck_match::MatchOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Master list file; the embedded list is used when absent.
    pub master: Option<PathBuf>,
    pub matching: MatchOptions,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub master: Option<PathBuf>,
    pub similarity_threshold: Option<f64>,
    pub fallback_max_chars: Option<usize>,
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("parse config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("load config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Defaults when `path` is `None`, the parsed file otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies flag values and checks the resulting options.
    pub fn apply(mut self, overrides: &ConfigOverrides) -> Result<Self> {
        if let Some(master) = &overrides.master {
            self.master = Some(master.clone());
        }
        if let Some(threshold) = overrides.similarity_threshold {
            self.matching = self.matching.with_similarity_threshold(threshold);
        }
        if let Some(chars) = overrides.fallback_max_chars {
            self.matching = self.matching.with_fallback_max_chars(chars);
        }
        self.matching.validate().context("invalid matching options")?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_matching_section_keeps_other_defaults() {
        let config = AppConfig::from_toml("[matching]\nsimilarity_threshold = 0.8\n").unwrap();
        assert_eq!(config.matching.similarity_threshold, 0.8);
        assert_eq!(
            config.matching.fallback_max_chars,
            MatchOptions::default().fallback_max_chars
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(AppConfig::from_toml("mastr = \"x.csv\"\n").is_err());
    }

    #[test]
    fn flags_override_file() {
        let config = AppConfig::from_toml("master = \"a.csv\"\n[matching]\nfallback_max_chars = 40\n")
            .unwrap()
            .apply(&ConfigOverrides {
                master: Some(PathBuf::from("b.csv")),
                similarity_threshold: None,
                fallback_max_chars: Some(20),
            })
            .unwrap();
        assert_eq!(config.master, Some(PathBuf::from("b.csv")));
        assert_eq!(config.matching.fallback_max_chars, 20);
    }

    #[test]
    fn out_of_range_threshold_fails() {
        let overrides = ConfigOverrides {
            similarity_threshold: Some(1.5),
            ..ConfigOverrides::default()
        };
        assert!(AppConfig::default().apply(&overrides).is_err());
    }
}
