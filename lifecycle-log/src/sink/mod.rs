//! Structured logging sinks.
//!
//! The lifecycle logger never talks to a logging library directly. It builds
//! records through [`Entry`] and hands them to a [`Sink`], so any structured
//! backend can be plugged in.
//!
//! # Architecture
//!
//! - `Sink` trait: the capability the logger writes to
//! - `TracingSink`: production adapter that delegates to the `tracing` crate
//! - `JsonSink`: line-delimited JSON over any `io::Write`
//! - `MemorySink`: keeps records in memory for assertions
//! - `NoOpSink`: silent sink, substituted when none is supplied
//!
//! # Usage
//!
//! ```
//! use lifecycle_log::sink::{Entry, Level, MemorySink, Sink};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! Entry::new(sink.as_ref(), Level::Info)
//!     .str("callee", "start")
//!     .msg("OnStart hook executing");
//! assert_eq!(sink.len(), 1);
//! ```

mod json;
mod memory;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use json::{to_json, JsonSink, ERROR_KEY, LEVEL_KEY, MESSAGE_KEY};
pub use memory::MemorySink;
pub use noop::NoOpSink;
pub use r#trait::{Entry, FieldValue, Level, ParseLevelError, Record, Sink};
pub use tracing_adapter::{TracingSink, TRACING_TARGET};
