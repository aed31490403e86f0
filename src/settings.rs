//! User settings for the terminal game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings loaded from an optional TOML file.
///
/// Every field has a default, so a file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// File the TUI writes its log to.
    log_file: PathBuf,

    /// Tracing filter used when neither the CLI nor `RUST_LOG` provides one.
    log_filter: String,

    /// Show cell numbers on empty squares.
    show_hints: bool,

    /// How long the event loop waits for input before redrawing.
    tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tictactoe_history.log"),
            log_filter: "info".to_string(),
            show_hints: true,
            tick_rate_ms: 250,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        if settings.tick_rate_ms == 0 {
            return Err(SettingsError::new("tick_rate_ms must be greater than zero"));
        }
        Ok(settings)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Turns cell hints on or off.
    pub fn with_show_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml("show_hints = false\n").unwrap();
        assert!(!settings.show_hints());
        assert_eq!(settings.log_filter(), "info");
        assert_eq!(*settings.tick_rate_ms(), 250);
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let err = Settings::from_toml("tick_rate_ms = 0").unwrap_err();
        assert!(err.message.contains("tick_rate_ms"));
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(Settings::from_toml("show_hints = \"yes\"").is_err());
    }

    #[test]
    fn test_builders_override() {
        let settings = Settings::default()
            .with_log_filter("debug")
            .with_show_hints(false);
        assert_eq!(settings.log_filter(), "debug");
        assert!(!settings.show_hints());
    }
}
