use crate::level::Level;
use crate::sink::LogSink;
use std::error::Error;

/// A sink that simply drops all lines.
///
/// Useful for measuring the overhead of the pipeline itself without any
/// I/O, and for unit tests that don't care about persistence.
#[derive(Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn emit(&self, _level: Level, _tag: &str, _line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
