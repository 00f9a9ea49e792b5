//! Play configuration: TOML file, then command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use newell_tictactoe::{ForkDefense, Mark};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// The human's mark.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// How the engine answers several fork threats.
    #[serde(default)]
    fork_defense: ForkDefense,
}

fn default_human_mark() -> Mark {
    Mark::X
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_mark: default_human_mark(),
            fork_defense: ForkDefense::default(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human_mark = %config.human_mark, fork_defense = %config.fork_defense, "Config loaded");
        Ok(config)
    }

    /// Applies command-line flags over the loaded values.
    pub fn with_overrides(mut self, mark: Option<Mark>, fork_defense: Option<ForkDefense>) -> Self {
        if let Some(mark) = mark {
            self.human_mark = mark;
        }
        if let Some(fork_defense) = fork_defense {
            self.fork_defense = fork_defense;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "human_mark = \"O\"\nfork_defense = \"forcing-safe\"").unwrap();
        let config = PlayConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.human_mark(), Mark::O);
        assert_eq!(*config.fork_defense(), ForkDefense::ForcingSafe);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = PlayConfig::from_file(file.path()).unwrap();
        assert_eq!(config, PlayConfig::default());
    }

    #[test]
    fn test_bad_value_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fork_defense = \"reckless\"").unwrap();
        let err = PlayConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = PlayConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_flags_override_file() {
        let config = PlayConfig::default().with_overrides(Some(Mark::O), None);
        assert_eq!(*config.human_mark(), Mark::O);
        assert_eq!(*config.fork_defense(), ForkDefense::Canonical);
    }
}
