use crate::level::Level;
use crate::sink::LogSink;
use std::error::Error;
use std::io::{self, Write};

/// Sink that prints finished lines to the process console.
///
/// Writes to stdout by default; use [`ConsoleSink::stderr`] for stderr.
pub struct ConsoleSink {
    to_stderr: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        ConsoleSink { to_stderr: false }
    }

    pub fn stderr() -> Self {
        ConsoleSink { to_stderr: true }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        ConsoleSink::new()
    }
}

impl LogSink for ConsoleSink {
    fn emit(&self, _level: Level, _tag: &str, line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.to_stderr {
            let mut handle = io::stderr().lock();
            writeln!(handle, "{line}")?;
            handle.flush()?;
        } else {
            let mut handle = io::stdout().lock();
            writeln!(handle, "{line}")?;
            handle.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.to_stderr {
            io::stderr().lock().flush()?;
        } else {
            io::stdout().lock().flush()?;
        }
        Ok(())
    }
}
