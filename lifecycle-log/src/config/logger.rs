//! Lifecycle logger configuration.

use std::env;

use thiserror::Error;

use crate::sink::{Level, ParseLevelError};

/// Environment variable holding the level for successful events.
pub const LOG_LEVEL_ENV: &str = "LIFECYCLE_LOG_LEVEL";
/// Environment variable holding the level for failed events.
pub const ERROR_LEVEL_ENV: &str = "LIFECYCLE_ERROR_LEVEL";

/// Default level for successful events.
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;
/// Default level for failed events.
pub const DEFAULT_ERROR_LEVEL: Level = Level::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A level variable held an unknown level name
    #[error("Invalid configuration: {key} - {source}")]
    InvalidLevel {
        key: String,
        #[source]
        source: ParseLevelError,
    },
}

/// Levels used by [`LifecycleLogger`](crate::LifecycleLogger).
///
/// # Example
///
/// ```
/// use lifecycle_log::config::LoggerConfig;
/// use lifecycle_log::sink::Level;
///
/// // Using defaults
/// let config = LoggerConfig::default();
/// assert_eq!(config.log_level(), Level::Info);
/// assert_eq!(config.error_level(), Level::Error);
///
/// // Custom configuration
/// let config = LoggerConfig::new()
///     .with_log_level(Level::Debug)
///     .with_error_level(Level::Warn);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Level for events that completed successfully
    log_level: Level,
    /// Level for events carrying a failure
    error_level: Level,
}

impl LoggerConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read levels from `LIFECYCLE_LOG_LEVEL` and `LIFECYCLE_ERROR_LEVEL`.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(level) = parse_level(&lookup, LOG_LEVEL_ENV)? {
            config.log_level = level;
        }
        if let Some(level) = parse_level(&lookup, ERROR_LEVEL_ENV)? {
            config.error_level = level;
        }
        Ok(config)
    }

    /// Set the level for successful events.
    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Set the level for failed events.
    pub fn with_error_level(mut self, level: Level) -> Self {
        self.error_level = level;
        self
    }

    /// Get the level for successful events.
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    /// Get the level for failed events.
    pub fn error_level(&self) -> Level {
        self.error_level
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            error_level: DEFAULT_ERROR_LEVEL,
        }
    }
}

fn parse_level<F>(lookup: &F, key: &str) -> Result<Option<Level>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value
            .parse()
            .map(Some)
            .map_err(|source| ConfigError::InvalidLevel {
                key: key.to_string(),
                source,
            }),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.log_level(), DEFAULT_LOG_LEVEL);
        assert_eq!(config.error_level(), DEFAULT_ERROR_LEVEL);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(LoggerConfig::new(), LoggerConfig::default());
    }

    #[test]
    fn test_with_levels() {
        let config = LoggerConfig::new().with_log_level(Level::Debug);
        assert_eq!(config.log_level(), Level::Debug);
        assert_eq!(config.error_level(), DEFAULT_ERROR_LEVEL); // Unchanged

        let config = config.with_error_level(Level::Warn);
        assert_eq!(config.error_level(), Level::Warn);
    }

    #[test]
    fn test_from_lookup_unset_keeps_defaults() {
        let config = LoggerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_from_lookup_reads_both_levels() {
        let config = LoggerConfig::from_lookup(lookup(&[
            (LOG_LEVEL_ENV, "debug"),
            (ERROR_LEVEL_ENV, "WARN"),
        ]))
        .unwrap();
        assert_eq!(config.log_level(), Level::Debug);
        assert_eq!(config.error_level(), Level::Warn);
    }

    #[test]
    fn test_from_lookup_blank_value_is_unset() {
        let config = LoggerConfig::from_lookup(lookup(&[(LOG_LEVEL_ENV, "  ")])).unwrap();
        assert_eq!(config.log_level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_from_lookup_rejects_unknown_level() {
        let err = LoggerConfig::from_lookup(lookup(&[(ERROR_LEVEL_ENV, "fatal")])).unwrap_err();
        match &err {
            ConfigError::InvalidLevel { key, source } => {
                assert_eq!(key, ERROR_LEVEL_ENV);
                assert_eq!(source.value, "fatal");
            }
        }
        assert!(err.to_string().contains(ERROR_LEVEL_ENV));
    }
}
