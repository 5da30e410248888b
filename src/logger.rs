use crate::config::{LogConfig, StackTraceConfig};
use crate::dispatch::SinkSet;
use crate::interceptor;
use crate::level::Level;
use crate::record::{render_error_chain, LogRecord};
use crate::sink::LogSink;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

const BORDER_WIDTH: usize = 60;

/// The explicit logging context: level gate → interceptor chain →
/// compose/flatten → fan-out to the configured sinks, all synchronously
/// on the calling thread.
///
/// A `Logger` is cheap to clone (configuration and sinks are shared), so
/// call sites can hold their own copy; [`with_tag`](Logger::with_tag)
/// derives one with a different default tag. The process-wide instance in
/// [`crate::init`] is a thin wrapper around this type.
#[derive(Clone)]
pub struct Logger {
    config: Arc<LogConfig>,
    tag: String,
    sinks: Arc<SinkSet>,
}

impl Logger {
    pub fn new(config: LogConfig, sinks: Vec<Arc<dyn LogSink>>) -> Self {
        let tag = config.tag.clone();
        Logger {
            config: Arc::new(config),
            tag,
            sinks: Arc::new(SinkSet::new(sinks)),
        }
    }

    /// A logger sharing this one's configuration and sinks, with a
    /// different default tag.
    pub fn with_tag(&self, tag: impl Into<String>) -> Logger {
        Logger {
            config: Arc::clone(&self.config),
            tag: tag.into(),
            sinks: Arc::clone(&self.sinks),
        }
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    pub fn sinks(&self) -> &SinkSet {
        &self.sinks
    }

    pub fn v(&self, msg: impl fmt::Display) {
        self.log(Level::Verbose, msg);
    }

    pub fn d(&self, msg: impl fmt::Display) {
        self.log(Level::Debug, msg);
    }

    pub fn i(&self, msg: impl fmt::Display) {
        self.log(Level::Info, msg);
    }

    pub fn w(&self, msg: impl fmt::Display) {
        self.log(Level::Warn, msg);
    }

    pub fn e(&self, msg: impl fmt::Display) {
        self.log(Level::Error, msg);
    }

    pub fn a(&self, msg: impl fmt::Display) {
        self.log(Level::Assert, msg);
    }

    pub fn log(&self, level: Level, msg: impl fmt::Display) {
        self.print(level, msg.to_string(), None);
    }

    pub fn w_err(&self, msg: impl fmt::Display, err: &(dyn Error + 'static)) {
        self.log_err(Level::Warn, msg, err);
    }

    pub fn e_err(&self, msg: impl fmt::Display, err: &(dyn Error + 'static)) {
        self.log_err(Level::Error, msg, err);
    }

    /// Log a message together with an error value; the error's chain is
    /// appended to the message as continuation lines.
    pub fn log_err(&self, level: Level, msg: impl fmt::Display, err: &(dyn Error + 'static)) {
        self.print(level, msg.to_string(), Some(render_error_chain(err)));
    }

    /// Flush every configured sink, best-effort.
    pub fn flush(&self) {
        self.sinks.flush();
    }

    fn print(&self, level: Level, message: String, error: Option<String>) {
        if !self.config.min_level.admits(level) {
            return;
        }

        let mut record = LogRecord::new(level, self.tag.clone(), message);
        record.error = error;
        let Some(record) = interceptor::run(&self.config.interceptors, record) else {
            return;
        };

        let body = self.compose(&record);
        let line = self
            .config
            .flattener
            .flatten(record.timestamp, record.level, &record.tag, &body);
        self.sinks.dispatch(record.level, &record.tag, &line);
    }

    /// Assemble the final message body: optional thread info and stack
    /// trace sections, then the message with its error chain, optionally
    /// surrounded by a border. Decorations never touch the record itself.
    fn compose(&self, record: &LogRecord) -> String {
        let mut sections: Vec<String> = Vec::new();

        if self.config.thread_info {
            let thread = std::thread::current();
            sections.push(format!("Thread: {}", thread.name().unwrap_or("<unnamed>")));
        }

        if let Some(trace) = &self.config.stack_trace {
            let frames = capture_stack(trace);
            if !frames.is_empty() {
                sections.push(frames.join("\n"));
            }
        }

        let mut body = record.message.clone();
        if let Some(error) = &record.error {
            body.push('\n');
            body.push_str(error);
        }
        sections.push(body);

        if self.config.border {
            border(&sections)
        } else {
            sections.join("\n")
        }
    }
}

/// Box-drawing border around the message sections, one divider between
/// adjacent sections.
fn border(sections: &[String]) -> String {
    let mut out = String::new();
    out.push('╔');
    out.push_str(&"═".repeat(BORDER_WIDTH));
    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            out.push('\n');
            out.push('╟');
            out.push_str(&"─".repeat(BORDER_WIDTH));
        }
        for line in section.lines() {
            out.push_str("\n║ ");
            out.push_str(line);
        }
    }
    out.push('\n');
    out.push('╚');
    out.push_str(&"═".repeat(BORDER_WIDTH));
    out
}

/// Best-effort stack of the log call site: internal and runtime frames
/// are skipped, frames from the configured origin (a logging wrapper) are
/// skipped, and the rest is depth-limited.
fn capture_stack(config: &StackTraceConfig) -> Vec<String> {
    let raw = std::backtrace::Backtrace::force_capture().to_string();
    let mut frames = Vec::new();
    for line in raw.lines() {
        let trimmed = line.trim_start();
        // Symbol lines look like "7: path::to::function"; location lines
        // ("at src/..") and anything unparseable are skipped.
        let Some((index, symbol)) = trimmed.split_once(": ") else {
            continue;
        };
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        if is_internal_frame(symbol) {
            continue;
        }
        if let Some(origin) = &config.origin {
            if symbol.contains(origin.as_str()) {
                continue;
            }
        }
        frames.push(format!("\tat {symbol}"));
        if config.depth != 0 && frames.len() >= config.depth {
            break;
        }
    }
    frames
}

fn is_internal_frame(symbol: &str) -> bool {
    symbol.starts_with("std::")
        || symbol.starts_with("core::")
        || symbol.starts_with("alloc::")
        || symbol.starts_with("backtrace::")
        || symbol.starts_with("__")
        || symbol.contains("fanlog::")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{Level, LevelFilter};
    use std::sync::Mutex;

    struct SpySink {
        lines: Mutex<Vec<String>>,
    }

    impl SpySink {
        fn new() -> Arc<Self> {
            Arc::new(SpySink {
                lines: Mutex::new(Vec::new()),
            })
        }

        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl LogSink for SpySink {
        fn emit(
            &self,
            _level: Level,
            _tag: &str,
            line: &str,
        ) -> Result<(), Box<dyn Error + Send + Sync>> {
            self.lines.lock().unwrap().push(line.to_string());
            Ok(())
        }
    }

    #[test]
    fn default_tag_and_with_tag_override() {
        let spy = SpySink::new();
        let logger = Logger::new(LogConfig::builder().tag("APP").build(), vec![spy.clone()]);
        logger.i("hello");
        logger.with_tag("NET").i("connected");

        let lines = spy.lines();
        assert!(lines[0].contains("I/APP: hello"), "got: {}", lines[0]);
        assert!(lines[1].contains("I/NET: connected"), "got: {}", lines[1]);
    }

    #[test]
    fn gated_records_never_build_lines() {
        let spy = SpySink::new();
        let logger = Logger::new(
            LogConfig::builder()
                .min_level(LevelFilter::AtLeast(Level::Error))
                .build(),
            vec![spy.clone()],
        );
        logger.i("dropped");
        logger.e("kept");
        let lines = spy.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("kept"));
    }

    #[test]
    fn error_chain_becomes_continuation_lines() {
        let spy = SpySink::new();
        let logger = Logger::new(LogConfig::default(), vec![spy.clone()]);
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        logger.e_err("write failed", &err);
        let lines = spy.lines();
        assert!(lines[0].contains("write failed\ndisk on fire"), "got: {}", lines[0]);
    }

    #[test]
    fn border_surrounds_sections() {
        let sections = vec!["Thread: main".to_string(), "msg".to_string()];
        let bordered = border(&sections);
        let lines: Vec<&str> = bordered.lines().collect();
        assert!(lines[0].starts_with('╔'));
        assert_eq!(lines[1], "║ Thread: main");
        assert!(lines[2].starts_with('╟'));
        assert_eq!(lines[3], "║ msg");
        assert!(lines[4].starts_with('╚'));
    }

    #[test]
    fn thread_info_section_is_prepended() {
        let spy = SpySink::new();
        let logger = Logger::new(
            LogConfig::builder().thread_info(true).build(),
            vec![spy.clone()],
        );
        logger.i("payload");
        let lines = spy.lines();
        assert!(lines[0].contains("Thread: "), "got: {}", lines[0]);
        assert!(lines[0].contains("payload"));
    }
}
