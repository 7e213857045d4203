//! Tracing library adapter implementation.

use std::fmt;

use crate::sink::{Level, Record, Sink};

/// Target used for every event emitted by [`TracingSink`].
pub const TRACING_TARGET: &str = "lifecycle";

/// Sink implementation that delegates to the `tracing` crate.
///
/// Each record becomes one `tracing` event at the matching level. Record
/// fields are rendered into a single `fields` value since `tracing` needs
/// field names at compile time; the failure, if any, goes to `error`.
///
/// # Example
///
/// ```ignore
/// use lifecycle_log::sink::{Sink, TracingSink};
/// use lifecycle_log::LifecycleLogger;
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already initialized
/// let sink: Arc<dyn Sink> = Arc::new(TracingSink::new());
/// let logger = LifecycleLogger::new(Some(sink));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink adapter.
    pub fn new() -> Self {
        Self
    }
}

/// Renders record fields as `key=value` pairs separated by spaces.
struct Fields<'a>(&'a Record);

impl fmt::Display for Fields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.0.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

macro_rules! emit {
    ($lvl:ident, $record:expr) => {{
        let record = $record;
        match &record.error {
            Some(err) => tracing::$lvl!(
                target: TRACING_TARGET,
                fields = %Fields(record),
                error = %err,
                "{}",
                record.message
            ),
            None => tracing::$lvl!(
                target: TRACING_TARGET,
                fields = %Fields(record),
                "{}",
                record.message
            ),
        }
    }};
}

impl Sink for TracingSink {
    fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Trace => tracing::enabled!(target: TRACING_TARGET, tracing::Level::TRACE),
            Level::Debug => tracing::enabled!(target: TRACING_TARGET, tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(target: TRACING_TARGET, tracing::Level::INFO),
            Level::Warn => tracing::enabled!(target: TRACING_TARGET, tracing::Level::WARN),
            Level::Error => tracing::enabled!(target: TRACING_TARGET, tracing::Level::ERROR),
        }
    }

    fn write(&self, record: &Record) {
        match record.level {
            Level::Trace => emit!(trace, record),
            Level::Debug => emit!(debug, record),
            Level::Info => emit!(info, record),
            Level::Warn => emit!(warn, record),
            Level::Error => emit!(error, record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::failure;
    use crate::logging::build_subscriber;
    use crate::sink::Entry;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_tracing_sink_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingSink>();
    }

    #[test]
    fn test_tracing_sink_debug_impl() {
        assert_eq!(format!("{:?}", TracingSink::new()), "TracingSink");
    }

    #[test]
    fn test_tracing_sink_writes_through_subscriber() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = build_subscriber("info", move || writer.clone()).unwrap();

        tracing::subscriber::with_default(subscriber, || {
            let sink = TracingSink::new();
            Entry::new(&sink, Level::Info)
                .str("callee", "f")
                .str("caller", "c")
                .msg("OnStart hook executing");
            Entry::new(&sink, Level::Error)
                .err(&failure("fail"))
                .msg("start failed");
        });

        let out = capture.contents();
        assert!(out.contains("OnStart hook executing"));
        assert!(out.contains("callee=f caller=c"));
        assert!(out.contains("start failed"));
        assert!(out.contains("fail"));
        assert!(out.contains("ERROR"));
    }

    #[test]
    fn test_tracing_sink_respects_filter() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = build_subscriber("warn", move || writer.clone()).unwrap();

        tracing::subscriber::with_default(subscriber, || {
            let sink = TracingSink::new();
            assert!(!sink.enabled(Level::Info));
            assert!(sink.enabled(Level::Error));
            Entry::new(&sink, Level::Info).msg("filtered out");
            Entry::new(&sink, Level::Warn).msg("kept");
        });

        let out = capture.contents();
        assert!(!out.contains("filtered out"));
        assert!(out.contains("kept"));
    }

    #[test]
    fn test_tracing_sink_without_subscriber_is_silent() {
        let sink = TracingSink;
        Entry::new(&sink, Level::Info).msg("no subscriber installed");
    }
}
