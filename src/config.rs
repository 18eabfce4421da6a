//! Game configuration.

use crate::game::{COUNT_TOO_SMALL, TOO_FEW_CHILDREN};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one counting game.
///
/// ```toml
/// children = 7
/// count = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of children in the circle.
    #[serde(default = "default_children")]
    children: i64,

    /// How far each round counts before a child leaves.
    #[serde(default = "default_count")]
    count: i64,
}

#[instrument]
fn default_children() -> i64 {
    2
}

#[instrument]
fn default_count() -> i64 {
    1
}

impl GameConfig {
    /// Creates a configuration from explicit values.
    #[instrument]
    pub fn new(children: i64, count: i64) -> Self {
        Self { children, count }
    }

    /// Loads configuration from a TOML file.
    ///
    /// Values are not validated here; overrides may still replace them.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(children = config.children, count = config.count, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns a copy with any provided values replacing the loaded ones.
    #[instrument(skip(self))]
    pub fn with_overrides(self, children: Option<i64>, count: Option<i64>) -> Self {
        Self {
            children: children.unwrap_or(self.children),
            count: count.unwrap_or(self.count),
        }
    }

    /// Checks the values a game can be built from.
    #[instrument(skip(self), fields(children = self.children, count = self.count))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.children < 2 {
            return Err(ConfigError::new(TOO_FEW_CHILDREN.to_string()));
        }
        if self.count < 1 {
            return Err(ConfigError::new(COUNT_TOO_SMALL.to_string()));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_children(), default_count())
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

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = GameConfig::from_toml_str("count = 4").unwrap();
        assert_eq!(*config.children(), 2);
        assert_eq!(*config.count(), 4);
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::new(5, 2).with_overrides(Some(9), None);
        assert_eq!(config, GameConfig::new(9, 2));
    }

    #[test]
    fn test_validate_rejects_small_circle() {
        let err = GameConfig::new(1, 1).validate().unwrap_err();
        assert!(err.message.contains(TOO_FEW_CHILDREN));
    }

    #[test]
    fn test_validate_rejects_zero_count() {
        let config = GameConfig::from_toml_str("children = 3\ncount = 0").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.message.contains(COUNT_TOO_SMALL));
    }

    #[test]
    fn test_parse_error_reported() {
        let err = GameConfig::from_toml_str("children = \"many\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
