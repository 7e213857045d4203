//! Lifecycle events reported by the dependency-injection container.
//!
//! Each variant of [`Event`] wraps a plain attribute struct. Structs derive
//! `Default` so callers only spell out the fields they care about:
//!
//! ```
//! use lifecycle_log::event::{Event, OnStartExecuted};
//! use std::time::Duration;
//!
//! let event: Event = OnStartExecuted {
//!     function_name: "main.start".into(),
//!     caller_name: "main.run".into(),
//!     runtime: Duration::from_millis(3),
//!     ..Default::default()
//! }
//! .into();
//! assert!(event.failure().is_none());
//! ```

use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Opaque error carried by an event when the step it describes failed.
pub type Failure = Arc<dyn Error + Send + Sync + 'static>;

/// Wrap any error (or message) as a [`Failure`].
///
/// ```
/// let err = lifecycle_log::event::failure("dial tcp: connection refused");
/// assert_eq!(err.to_string(), "dial tcp: connection refused");
/// ```
pub fn failure(err: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Failure {
    Arc::from(err.into())
}

/// An OnStart hook is about to run.
#[derive(Debug, Clone, Default)]
pub struct OnStartExecuting {
    pub function_name: String,
    pub caller_name: String,
}

/// An OnStart hook finished.
#[derive(Debug, Clone, Default)]
pub struct OnStartExecuted {
    pub function_name: String,
    pub caller_name: String,
    pub runtime: Duration,
    pub err: Option<Failure>,
}

/// An OnStop hook is about to run.
#[derive(Debug, Clone, Default)]
pub struct OnStopExecuting {
    pub function_name: String,
    pub caller_name: String,
}

/// An OnStop hook finished.
#[derive(Debug, Clone, Default)]
pub struct OnStopExecuted {
    pub function_name: String,
    pub caller_name: String,
    pub runtime: Duration,
    pub err: Option<Failure>,
}

/// A value was supplied to the container.
#[derive(Debug, Clone, Default)]
pub struct Supplied {
    pub type_name: String,
    pub stack_trace: Vec<String>,
    pub module_trace: Vec<String>,
    /// Empty when supplied at the top level.
    pub module_name: String,
    pub err: Option<Failure>,
}

/// A constructor was registered with the container.
#[derive(Debug, Clone, Default)]
pub struct Provided {
    pub constructor_name: String,
    pub stack_trace: Vec<String>,
    pub module_trace: Vec<String>,
    pub output_type_names: Vec<String>,
    pub module_name: String,
    /// Whether the outputs are visible only inside their module.
    pub private: bool,
    pub err: Option<Failure>,
}

/// A decorator was registered with the container.
#[derive(Debug, Clone, Default)]
pub struct Decorated {
    pub decorator_name: String,
    pub stack_trace: Vec<String>,
    pub module_trace: Vec<String>,
    pub module_name: String,
    pub output_type_names: Vec<String>,
    pub err: Option<Failure>,
}

/// A value was replaced in the container.
#[derive(Debug, Clone, Default)]
pub struct Replaced {
    pub output_type_names: Vec<String>,
    pub stack_trace: Vec<String>,
    pub module_trace: Vec<String>,
    pub module_name: String,
    pub err: Option<Failure>,
}

/// A constructor, decorator or supply function ran.
#[derive(Debug, Clone, Default)]
pub struct Run {
    pub name: String,
    /// One of `provide`, `decorate` or `supply`.
    pub kind: String,
    pub module_name: String,
    pub runtime: Duration,
    pub err: Option<Failure>,
}

/// A function is about to be invoked.
#[derive(Debug, Clone, Default)]
pub struct Invoking {
    pub function_name: String,
    pub module_name: String,
}

/// An invoked function returned.
#[derive(Debug, Clone, Default)]
pub struct Invoked {
    pub function_name: String,
    pub module_name: String,
    /// Stack of the failed invocation.
    pub trace: String,
    pub err: Option<Failure>,
}

/// OS signal that asked the application to stop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Signal {
    #[default]
    Interrupt,
    Terminate,
    Hangup,
    Quit,
    /// Any other signal, by name.
    Other(String),
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Interrupt => f.write_str("interrupt"),
            Signal::Terminate => f.write_str("terminated"),
            Signal::Hangup => f.write_str("hangup"),
            Signal::Quit => f.write_str("quit"),
            Signal::Other(name) => f.write_str(name),
        }
    }
}

/// The application received a stop signal.
#[derive(Debug, Clone, Default)]
pub struct Stopping {
    pub signal: Signal,
}

/// The application finished stopping.
#[derive(Debug, Clone, Default)]
pub struct Stopped {
    pub err: Option<Failure>,
}

/// Start failed and already-run OnStart hooks are being unwound.
#[derive(Debug, Clone)]
pub struct RollingBack {
    pub start_err: Failure,
}

/// The rollback finished.
#[derive(Debug, Clone, Default)]
pub struct RolledBack {
    pub err: Option<Failure>,
}

/// The application finished starting.
#[derive(Debug, Clone, Default)]
pub struct Started {
    pub err: Option<Failure>,
}

/// A custom event logger was built.
#[derive(Debug, Clone, Default)]
pub struct LoggerInitialized {
    pub constructor_name: String,
    pub err: Option<Failure>,
}

/// A single moment in the container's startup/shutdown sequence.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Event {
    OnStartExecuting(OnStartExecuting),
    OnStartExecuted(OnStartExecuted),
    OnStopExecuting(OnStopExecuting),
    OnStopExecuted(OnStopExecuted),
    Supplied(Supplied),
    Provided(Provided),
    Decorated(Decorated),
    Replaced(Replaced),
    Run(Run),
    Invoking(Invoking),
    Invoked(Invoked),
    Stopping(Stopping),
    Stopped(Stopped),
    RollingBack(RollingBack),
    RolledBack(RolledBack),
    Started(Started),
    LoggerInitialized(LoggerInitialized),
}

impl Event {
    /// Short variant name, e.g. `"OnStartExecuted"`.
    pub fn name(&self) -> &'static str {
        match self {
            Event::OnStartExecuting(_) => "OnStartExecuting",
            Event::OnStartExecuted(_) => "OnStartExecuted",
            Event::OnStopExecuting(_) => "OnStopExecuting",
            Event::OnStopExecuted(_) => "OnStopExecuted",
            Event::Supplied(_) => "Supplied",
            Event::Provided(_) => "Provided",
            Event::Decorated(_) => "Decorated",
            Event::Replaced(_) => "Replaced",
            Event::Run(_) => "Run",
            Event::Invoking(_) => "Invoking",
            Event::Invoked(_) => "Invoked",
            Event::Stopping(_) => "Stopping",
            Event::Stopped(_) => "Stopped",
            Event::RollingBack(_) => "RollingBack",
            Event::RolledBack(_) => "RolledBack",
            Event::Started(_) => "Started",
            Event::LoggerInitialized(_) => "LoggerInitialized",
        }
    }

    /// The failure carried by this event, if any.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Event::OnStartExecuted(e) => e.err.as_ref(),
            Event::OnStopExecuted(e) => e.err.as_ref(),
            Event::Supplied(e) => e.err.as_ref(),
            Event::Provided(e) => e.err.as_ref(),
            Event::Decorated(e) => e.err.as_ref(),
            Event::Replaced(e) => e.err.as_ref(),
            Event::Run(e) => e.err.as_ref(),
            Event::Invoked(e) => e.err.as_ref(),
            Event::Stopped(e) => e.err.as_ref(),
            Event::RollingBack(e) => Some(&e.start_err),
            Event::RolledBack(e) => e.err.as_ref(),
            Event::Started(e) => e.err.as_ref(),
            Event::LoggerInitialized(e) => e.err.as_ref(),
            Event::OnStartExecuting(_)
            | Event::OnStopExecuting(_)
            | Event::Invoking(_)
            | Event::Stopping(_) => None,
        }
    }
}

macro_rules! impl_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Event {
                fn from(event: $variant) -> Self {
                    Event::$variant(event)
                }
            }
        )*
    };
}

impl_from!(
    OnStartExecuting,
    OnStartExecuted,
    OnStopExecuting,
    OnStopExecuted,
    Supplied,
    Provided,
    Decorated,
    Replaced,
    Run,
    Invoking,
    Invoked,
    Stopping,
    Stopped,
    RollingBack,
    RolledBack,
    Started,
    LoggerInitialized,
);
