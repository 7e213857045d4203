//! Sink trait and record building blocks.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::event::Failure;

/// Severity attached to every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Verbose debugging information
    Trace,
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
}

impl Level {
    /// Lowercase name used by `Display`, `FromStr` and the JSON sink.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a level name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level '{value}' (expected trace, debug, info, warn or error)")]
pub struct ParseLevelError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError {
                value: s.to_string(),
            }),
        }
    }
}

/// Value of a single record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Str(String),
    Strs(Vec<String>),
    Bool(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::Strs(items) => write!(f, "[{}]", items.join(",")),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// A committed log record, handed to [`Sink::write`].
#[derive(Debug, Clone)]
pub struct Record {
    pub level: Level,
    pub message: String,
    /// Fields in attachment order.
    pub fields: Vec<(&'static str, FieldValue)>,
    pub error: Option<Failure>,
}

impl Record {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Convenience accessor for string fields.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        match self.field(name) {
            Some(FieldValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Whether a field with this name was attached.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

/// Structured logging backend that records are written to.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. Callers may share one sink across
/// threads; serialising writes is the sink's job.
///
/// # Example
///
/// ```
/// use lifecycle_log::sink::{Entry, Level, MemorySink};
///
/// let sink = MemorySink::new();
/// Entry::new(&sink, Level::Info).str("callee", "f").msg("hello");
/// assert_eq!(sink.records()[0].message, "hello");
/// ```
pub trait Sink: Send + Sync {
    /// Whether records at `level` would be written at all.
    ///
    /// Entries for disabled levels skip field collection entirely.
    fn enabled(&self, _level: Level) -> bool {
        true
    }

    /// Serialize and write a committed record.
    fn write(&self, record: &Record);
}

/// Record under construction.
///
/// Created at a fixed level, fields are attached by chaining, and
/// [`Entry::msg`] commits the record to the sink.
#[must_use = "an entry does nothing until `msg` is called"]
pub struct Entry<'a> {
    sink: &'a dyn Sink,
    record: Option<Record>,
}

impl<'a> Entry<'a> {
    /// Start a record at `level`.
    pub fn new(sink: &'a dyn Sink, level: Level) -> Self {
        let record = sink.enabled(level).then(|| Record {
            level,
            message: String::new(),
            fields: Vec::new(),
            error: None,
        });
        Self { sink, record }
    }

    /// Whether this entry will produce a record.
    pub fn is_enabled(&self) -> bool {
        self.record.is_some()
    }

    fn field(mut self, name: &'static str, value: impl FnOnce() -> FieldValue) -> Self {
        if let Some(record) = self.record.as_mut() {
            record.fields.push((name, value()));
        }
        self
    }

    /// Attach a string field.
    pub fn str(self, name: &'static str, value: &str) -> Self {
        self.field(name, || FieldValue::Str(value.to_string()))
    }

    /// Attach a string sequence field.
    pub fn strs(self, name: &'static str, values: &[String]) -> Self {
        self.field(name, || FieldValue::Strs(values.to_vec()))
    }

    /// Attach a boolean field.
    pub fn bool(self, name: &'static str, value: bool) -> Self {
        self.field(name, || FieldValue::Bool(value))
    }

    /// Attach the failure carried by an event.
    pub fn err(mut self, failure: &Failure) -> Self {
        if let Some(record) = self.record.as_mut() {
            record.error = Some(failure.clone());
        }
        self
    }

    /// Commit the record with its message.
    pub fn msg(self, message: &str) {
        if let Some(mut record) = self.record {
            record.message = message.to_string();
            self.sink.write(&record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::failure;
    use crate::sink::{MemorySink, NoOpSink};

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("info".parse::<Level>(), Ok(Level::Info));
        assert_eq!("DEBUG".parse::<Level>(), Ok(Level::Debug));
        assert_eq!(" warning ".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("error".parse::<Level>(), Ok(Level::Error));
    }

    #[test]
    fn test_level_parse_rejects_unknown() {
        let err = "loud".parse::<Level>().unwrap_err();
        assert_eq!(err.value, "loud");
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_level_display_round_trips() {
        for level in [Level::Trace, Level::Debug, Level::Info, Level::Warn, Level::Error] {
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Str("x".into()).to_string(), "x");
        assert_eq!(
            FieldValue::Strs(vec!["a".into(), "b".into()]).to_string(),
            "[a,b]"
        );
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_entry_collects_fields_in_order() {
        let sink = MemorySink::new();
        Entry::new(&sink, Level::Warn)
            .str("callee", "f")
            .strs("stacktrace", &["s1".to_string()])
            .bool("private", true)
            .err(&failure("boom"))
            .msg("done");

        let records = sink.records();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.level, Level::Warn);
        assert_eq!(record.message, "done");
        let names: Vec<_> = record.fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(names, vec!["callee", "stacktrace", "private"]);
        assert_eq!(record.str_field("callee"), Some("f"));
        assert_eq!(record.error.as_ref().map(|e| e.to_string()), Some("boom".into()));
    }

    #[test]
    fn test_entry_without_msg_writes_nothing() {
        let sink = MemorySink::new();
        let _ = Entry::new(&sink, Level::Info).str("callee", "f");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_disabled_entry_is_noop() {
        let sink = NoOpSink;
        let entry = Entry::new(&sink, Level::Error);
        assert!(!entry.is_enabled());
        entry.str("callee", "f").msg("dropped");
    }
}
