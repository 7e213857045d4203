//! Lifecycle event logger.
//!
//! Maps every [`Event`] variant onto zero or more structured records written
//! to a [`Sink`]. Successful steps are logged at the configured log level,
//! failed steps at the configured error level.

use std::sync::Arc;

use crate::config::LoggerConfig;
use crate::event::Event;
use crate::sink::{Entry, Level, NoOpSink, Sink};

/// Consumer of lifecycle events.
pub trait EventLogger: Send + Sync {
    /// Log a single event. Never fails.
    fn log_event(&self, event: &Event);
}

/// [`EventLogger`] that writes structured records to a [`Sink`].
///
/// # Example
///
/// ```
/// use lifecycle_log::event::{Event, Invoking};
/// use lifecycle_log::sink::{Level, MemorySink, Sink};
/// use lifecycle_log::{EventLogger, LifecycleLogger};
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = LifecycleLogger::new(Some(sink.clone() as Arc<dyn Sink>))
///     .with_log_level(Level::Debug);
///
/// logger.log_event(&Event::Invoking(Invoking {
///     function_name: "main.register".into(),
///     module_name: String::new(),
/// }));
///
/// let records = sink.records();
/// assert_eq!(records[0].message, "invoking");
/// assert_eq!(records[0].level, Level::Debug);
/// assert!(!records[0].has_field("module"));
/// ```
#[derive(Clone)]
pub struct LifecycleLogger {
    inner: Arc<dyn Sink>,
    log_level: Level,
    error_level: Level,
}

impl std::fmt::Debug for LifecycleLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleLogger")
            .field("log_level", &self.log_level)
            .field("error_level", &self.error_level)
            .finish_non_exhaustive()
    }
}

impl LifecycleLogger {
    /// Create a logger writing to `sink`.
    ///
    /// A missing sink is replaced by [`NoOpSink`], making every call a no-op.
    pub fn new(sink: Option<Arc<dyn Sink>>) -> Self {
        Self {
            inner: sink.unwrap_or_else(|| Arc::new(NoOpSink)),
            log_level: Level::Info,
            error_level: Level::Error,
        }
    }

    /// Create a logger with levels taken from `config`.
    pub fn from_config(sink: Option<Arc<dyn Sink>>, config: &LoggerConfig) -> Self {
        Self::new(sink)
            .with_log_level(config.log_level())
            .with_error_level(config.error_level())
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

    /// Change the level for successful events. Affects later events only.
    pub fn set_log_level(&mut self, level: Level) {
        self.log_level = level;
    }

    /// Change the level for failed events. Affects later events only.
    pub fn set_error_level(&mut self, level: Level) {
        self.error_level = level;
    }

    fn log(&self) -> Entry<'_> {
        Entry::new(self.inner.as_ref(), self.log_level)
    }

    fn err(&self) -> Entry<'_> {
        Entry::new(self.inner.as_ref(), self.error_level)
    }
}

impl EventLogger for LifecycleLogger {
    fn log_event(&self, event: &Event) {
        match event {
            Event::OnStartExecuting(e) => self
                .log()
                .str("callee", &e.function_name)
                .str("caller", &e.caller_name)
                .msg("OnStart hook executing"),
            Event::OnStartExecuted(e) => match &e.err {
                Some(err) => self
                    .err()
                    .str("callee", &e.function_name)
                    .str("caller", &e.caller_name)
                    .err(err)
                    .msg("OnStart hook failed"),
                None => self
                    .log()
                    .str("callee", &e.function_name)
                    .str("caller", &e.caller_name)
                    .str("runtime", &runtime(e.runtime))
                    .msg("OnStart hook executed"),
            },
            Event::OnStopExecuting(e) => self
                .log()
                .str("callee", &e.function_name)
                .str("caller", &e.caller_name)
                .msg("OnStop hook executing"),
            Event::OnStopExecuted(e) => match &e.err {
                Some(err) => self
                    .err()
                    .str("callee", &e.function_name)
                    .str("caller", &e.caller_name)
                    .err(err)
                    .msg("OnStop hook failed"),
                None => self
                    .log()
                    .str("callee", &e.function_name)
                    .str("caller", &e.caller_name)
                    .str("runtime", &runtime(e.runtime))
                    .msg("OnStop hook executed"),
            },
            Event::Supplied(e) => {
                let entry = if e.err.is_some() { self.err() } else { self.log() };
                let entry = entry
                    .str("type", &e.type_name)
                    .strs("stacktrace", &e.stack_trace)
                    .strs("moduletrace", &e.module_trace);
                let entry = module_name(entry, &e.module_name);
                match &e.err {
                    Some(err) => entry.err(err).msg("error encountered while applying options"),
                    None => entry.msg("supplied"),
                }
            }
            Event::Provided(e) => {
                for rtype in &e.output_type_names {
                    let entry = self
                        .log()
                        .str("constructor", &e.constructor_name)
                        .strs("stacktrace", &e.stack_trace)
                        .strs("moduletrace", &e.module_trace);
                    let entry = module_name(entry, &e.module_name).str("type", rtype);
                    maybe_bool(entry, "private", e.private).msg("provided");
                }
                if let Some(err) = &e.err {
                    let entry = self
                        .err()
                        .strs("stacktrace", &e.stack_trace)
                        .strs("moduletrace", &e.module_trace);
                    module_name(entry, &e.module_name)
                        .err(err)
                        .msg("error encountered while applying options");
                }
            }
            Event::Run(e) => match &e.err {
                Some(_) => {
                    let entry = self.err().str("name", &e.name).str("kind", &e.kind);
                    module_name(entry, &e.module_name).msg("error returned");
                }
                None => {
                    let entry = self
                        .log()
                        .str("name", &e.name)
                        .str("kind", &e.kind)
                        .str("runtime", &runtime(e.runtime));
                    module_name(entry, &e.module_name).msg("run");
                }
            },
            Event::Invoking(e) => {
                let entry = self.log().str("function", &e.function_name);
                module_name(entry, &e.module_name).msg("invoking");
            }
            Event::Invoked(e) => {
                if let Some(err) = &e.err {
                    let entry = self
                        .err()
                        .err(err)
                        .str("stack", &e.trace)
                        .str("function", &e.function_name);
                    module_name(entry, &e.module_name).msg("invoke failed");
                }
            }
            Event::Stopping(e) => self
                .log()
                .str("signal", &e.signal.to_string().to_uppercase())
                .msg("received signal"),
            Event::Stopped(e) => {
                if let Some(err) = &e.err {
                    self.err().err(err).msg("stop failed");
                }
            }
            Event::RollingBack(e) => self
                .err()
                .err(&e.start_err)
                .msg("start failed, rolling back"),
            Event::RolledBack(e) => {
                if let Some(err) = &e.err {
                    self.err().err(err).msg("rollback failed");
                }
            }
            Event::Started(e) => match &e.err {
                Some(err) => self.err().err(err).msg("start failed"),
                None => self.log().msg("started"),
            },
            Event::LoggerInitialized(e) => match &e.err {
                Some(err) => self
                    .err()
                    .err(err)
                    .msg("custom logger initialization failed"),
                None => self
                    .log()
                    .str("function", &e.constructor_name)
                    .msg("initialized custom fxevent.Logger"),
            },
            // No rule for this event; dropped without a record.
            _ => {}
        }
    }
}

/// Render a duration the way `Debug` does (`123ns`, `1.5s`).
fn runtime(d: std::time::Duration) -> String {
    format!("{:?}", d)
}

/// Attach `module` only when the name is non-empty.
fn module_name<'a>(entry: Entry<'a>, name: &str) -> Entry<'a> {
    if name.is_empty() {
        return entry;
    }
    entry.str("module", name)
}

/// Attach a boolean field only when it is true.
fn maybe_bool<'a>(entry: Entry<'a>, name: &'static str, b: bool) -> Entry<'a> {
    if b {
        return entry.bool(name, true);
    }
    entry
}
