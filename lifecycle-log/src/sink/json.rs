//! Line-delimited JSON sink.

use std::io::Write;

use parking_lot::Mutex;
use serde_json::{Map, Value};

use crate::sink::{FieldValue, Level, Record, Sink};

/// Key holding the record level.
pub const LEVEL_KEY: &str = "level";
/// Key holding the attached failure.
pub const ERROR_KEY: &str = "error";
/// Key holding the record message.
pub const MESSAGE_KEY: &str = "message";

/// Writes one JSON object per record, newline terminated.
///
/// Output shape: `{"level":"info","callee":"f",...,"error":"...","message":"..."}`.
/// String sequences are JSON arrays and booleans JSON booleans. Write errors
/// are dropped; the sink never reports failure to its caller.
///
/// # Example
///
/// ```
/// use lifecycle_log::sink::{Entry, JsonSink, Level};
///
/// let sink = JsonSink::new(Vec::new());
/// Entry::new(&sink, Level::Info).str("callee", "f").msg("started");
/// let out = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(out, "{\"level\":\"info\",\"callee\":\"f\",\"message\":\"started\"}\n");
/// ```
#[derive(Debug)]
pub struct JsonSink<W> {
    writer: Mutex<W>,
    min_level: Level,
}

impl<W: Write + Send> JsonSink<W> {
    /// Create a sink writing every level to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            min_level: Level::Trace,
        }
    }

    /// Drop records below `level`.
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Get the minimum level written.
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

/// Build the JSON object for a record.
pub fn to_json(record: &Record) -> Value {
    let mut object = Map::new();
    object.insert(
        LEVEL_KEY.to_string(),
        Value::String(record.level.as_str().to_string()),
    );
    for (name, value) in &record.fields {
        let value = match value {
            FieldValue::Str(s) => Value::String(s.clone()),
            FieldValue::Strs(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            FieldValue::Bool(b) => Value::Bool(*b),
        };
        object.insert((*name).to_string(), value);
    }
    if let Some(err) = &record.error {
        object.insert(ERROR_KEY.to_string(), Value::String(err.to_string()));
    }
    object.insert(
        MESSAGE_KEY.to_string(),
        Value::String(record.message.clone()),
    );
    Value::Object(object)
}

impl<W: Write + Send> Sink for JsonSink<W> {
    fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    fn write(&self, record: &Record) {
        let mut line = match serde_json::to_vec(&to_json(record)) {
            Ok(line) => line,
            Err(_) => return,
        };
        line.push(b'\n');
        let mut writer = self.writer.lock();
        let _ = writer.write_all(&line);
    }
}
