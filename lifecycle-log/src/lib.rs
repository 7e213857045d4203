//! lifecycle-log - Structured logging for dependency-injection lifecycle events
//!
//! This library turns the events a container emits while it starts and stops
//! (hooks running, values supplied, constructors provided, signals received)
//! into structured log records.
//!
//! # High-Level API
//!
//! [`LifecycleLogger`] implements [`EventLogger`] on top of any
//! [`sink::Sink`]:
//!
//! ```
//! use lifecycle_log::event::{Event, Stopping, Signal};
//! use lifecycle_log::sink::{JsonSink, Sink};
//! use lifecycle_log::{EventLogger, LifecycleLogger};
//! use std::sync::Arc;
//!
//! let sink: Arc<dyn Sink> = Arc::new(JsonSink::new(std::io::stderr()));
//! let logger = LifecycleLogger::new(Some(sink));
//! logger.log_event(&Event::Stopping(Stopping { signal: Signal::Interrupt }));
//! ```

pub mod config;
pub mod event;
pub mod logger;
pub mod logging;
pub mod sink;

pub use logger::{EventLogger, LifecycleLogger};

/// Version of the lifecycle-log library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
