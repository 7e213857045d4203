//! No-operation sink implementation.

use crate::sink::{Level, Record, Sink};

/// A sink that discards every record.
///
/// Substituted by [`LifecycleLogger::new`](crate::LifecycleLogger::new) when
/// no sink is supplied. It reports every level as disabled, so entries never
/// collect fields.
///
/// # Example
///
/// ```
/// use lifecycle_log::sink::{Entry, Level, NoOpSink};
///
/// let sink = NoOpSink;
/// Entry::new(&sink, Level::Error).msg("This record is discarded");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl Sink for NoOpSink {
    #[inline]
    fn enabled(&self, _level: Level) -> bool {
        false
    }

    #[inline]
    fn write(&self, _record: &Record) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Entry;

    #[test]
    fn test_noop_sink_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoOpSink>();
    }

    #[test]
    fn test_noop_sink_disables_all_levels() {
        let sink = NoOpSink;
        for level in [Level::Trace, Level::Debug, Level::Info, Level::Warn, Level::Error] {
            assert!(!sink.enabled(level));
        }
    }

    #[test]
    fn test_noop_sink_as_trait_object() {
        let sink: Box<dyn Sink> = Box::new(NoOpSink);
        Entry::new(sink.as_ref(), Level::Info)
            .str("callee", "f")
            .msg("test message");
        sink.write(&Record {
            level: Level::Error,
            message: "direct".to_string(),
            fields: Vec::new(),
            error: None,
        });
    }

    #[test]
    fn test_noop_sink_debug_impl() {
        assert_eq!(format!("{:?}", NoOpSink), "NoOpSink");
    }
}
