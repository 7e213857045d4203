//! Subscriber setup for the `tracing` backend.
//!
//! [`TracingSink`](crate::sink::TracingSink) only emits `tracing` events; a
//! subscriber decides where they go. This module builds one:
//! - `EnvFilter` directives (e.g. `"info"`, `"lifecycle=debug"`)
//! - Single-line fmt output without ANSI colors
//! - Falls back to `RUST_LOG`, then `info`, when no filter is given

use std::io;

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Errors from subscriber setup.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter string is not a valid `EnvFilter` directive
    #[error("Invalid log filter '{filter}': {source}")]
    Filter {
        filter: String,
        #[source]
        source: ParseError,
    },

    /// A global subscriber is already installed
    #[error("Failed to install log subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Build a subscriber filtering with `filter` and writing to `writer`.
///
/// The subscriber is not installed; pass it to
/// `tracing::subscriber::with_default` or use [`init_logging`].
pub fn build_subscriber<W>(
    filter: &str,
    writer: W,
) -> Result<impl Subscriber + Send + Sync + 'static, LoggingError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_new(filter).map_err(|source| LoggingError::Filter {
        filter: filter.to_string(),
        source,
    })?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    Ok(tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer))
}

/// Install a global stdout subscriber.
///
/// `None` uses `RUST_LOG`, or [`default_filter`] when that is unset.
///
/// # Errors
///
/// Returns error if the filter is invalid or a subscriber is already set
pub fn init_logging(filter: Option<&str>) -> Result<(), LoggingError> {
    let filter = match filter {
        Some(filter) => filter.to_string(),
        None => std::env::var(EnvFilter::DEFAULT_ENV)
            .unwrap_or_else(|_| default_filter().to_string()),
    };
    build_subscriber(&filter, io::stdout)?.try_init()?;
    Ok(())
}

/// Get default filter directive.
pub fn default_filter() -> &'static str {
    "info"
}
