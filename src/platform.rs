use crate::level::Level;
use crate::sink::LogSink;
use std::error::Error;

/// Sink that forwards finished lines into the host ecosystem's logging
/// via [`tracing`] events.
///
/// The record's tag travels as a `tag` field; the severity maps onto the
/// nearest `tracing` level (`Verbose` → trace, `Assert` → error, the rest
/// one-to-one). Whatever subscriber the host application installed decides
/// where the line ultimately lands.
#[derive(Clone, Copy, Default)]
pub struct PlatformSink;

impl LogSink for PlatformSink {
    fn emit(&self, level: Level, tag: &str, line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        match level {
            Level::Verbose => tracing::trace!(tag = tag, "{line}"),
            Level::Debug => tracing::debug!(tag = tag, "{line}"),
            Level::Info => tracing::info!(tag = tag, "{line}"),
            Level::Warn => tracing::warn!(tag = tag, "{line}"),
            Level::Error | Level::Assert => tracing::error!(tag = tag, "{line}"),
        }
        Ok(())
    }
}
