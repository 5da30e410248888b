use crate::level::Level;
use crate::sink::LogSink;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Fan-out dispatcher: broadcasts one finished line to every configured
/// sink, in registration order, isolating failures per sink.
///
/// An `Err` or a panic from one sink is counted, reported on stderr, and
/// never prevents the remaining sinks from being attempted — log delivery
/// is best-effort per destination, not all-or-nothing.
pub struct SinkSet {
    sinks: Vec<Arc<dyn LogSink>>,
    /// Sink emits attempted (records × sinks).
    pub total: AtomicU64,
    /// Emits that succeeded.
    pub delivered: AtomicU64,
    /// Emits dropped because the sink failed or panicked.
    pub failed: AtomicU64,
}

impl SinkSet {
    pub fn new(sinks: Vec<Arc<dyn LogSink>>) -> Self {
        SinkSet {
            sinks,
            total: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn dispatch(&self, level: Level, tag: &str, line: &str) {
        for sink in &self.sinks {
            self.total.fetch_add(1, Ordering::Relaxed);
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| sink.emit(level, tag, line)));
            match outcome {
                Ok(Ok(())) => {
                    self.delivered.fetch_add(1, Ordering::Relaxed);
                }
                Ok(Err(e)) => {
                    self.failed.fetch_add(1, Ordering::Relaxed);
                    eprintln!("fanlog: sink emit failed, dropping the line: {e}");
                }
                Err(_) => {
                    self.failed.fetch_add(1, Ordering::Relaxed);
                    eprintln!("fanlog: sink panicked during emit, dropping the line");
                }
            }
        }
    }

    /// Flush every sink, best-effort.
    pub fn flush(&self) {
        for sink in &self.sinks {
            if let Err(e) = sink.flush() {
                eprintln!("fanlog: sink flush failed: {e}");
            }
        }
    }
}
