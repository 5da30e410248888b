use crate::level::Level;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub tag: String,
    pub message: String,
    /// Rendered error chain, one cause per line. See [`render_error_chain`].
    pub error: Option<String>,
}

impl LogRecord {
    pub fn new(level: Level, tag: impl Into<String>, message: impl Into<String>) -> Self {
        LogRecord {
            timestamp: Utc::now(),
            level,
            tag: tag.into(),
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, err: &(dyn Error + 'static)) -> Self {
        self.error = Some(render_error_chain(err));
        self
    }

    // Interceptor transforms produce a new record instead of mutating
    // shared state.

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// Render an error and its `source()` chain as the error's `Display` text
/// followed by one `Caused by:` line per cause.
pub fn render_error_chain(err: &(dyn Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str("\nCaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Outer(Inner);

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "outer failed")
        }
    }

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "inner failed")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    impl Error for Inner {}

    #[test]
    fn error_chain_renders_every_cause() {
        let rendered = render_error_chain(&Outer(Inner));
        assert_eq!(rendered, "outer failed\nCaused by: inner failed");
    }

    #[test]
    fn with_helpers_build_new_records() {
        let record = LogRecord::new(Level::Info, "NET", "connected");
        let rewritten = record.clone().with_tag("net").with_level(Level::Debug);
        assert_eq!(record.tag, "NET");
        assert_eq!(rewritten.tag, "net");
        assert_eq!(rewritten.level, Level::Debug);
        assert_eq!(rewritten.message, "connected");
    }

    #[test]
    fn records_serialize() {
        let record = LogRecord::new(Level::Warn, "IO", "disk slow");
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["level"], "Warn");
        assert_eq!(json["tag"], "IO");
        assert_eq!(json["message"], "disk slow");
    }
}
