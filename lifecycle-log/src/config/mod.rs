//! Configuration for the lifecycle logger.
//!
//! # Example
//!
//! ```
//! use lifecycle_log::config::LoggerConfig;
//! use lifecycle_log::sink::Level;
//!
//! let config = LoggerConfig::new().with_log_level(Level::Debug);
//! assert_eq!(config.log_level(), Level::Debug);
//! ```

mod logger;

pub use logger::{
    ConfigError, LoggerConfig, DEFAULT_ERROR_LEVEL, DEFAULT_LOG_LEVEL, ERROR_LEVEL_ENV,
    LOG_LEVEL_ENV,
};
