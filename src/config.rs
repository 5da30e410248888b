use crate::flatten::{ClassicFlattener, Flatten};
use crate::interceptor::Interceptor;
use crate::level::LevelFilter;
use std::fmt;
use std::sync::Arc;

const DEFAULT_TAG: &str = "LOG";

/// Immutable configuration shared by a [`Logger`](crate::logger::Logger)
/// for its whole lifetime.
///
/// Built once via [`LogConfig::builder`]; the logger holds it behind an
/// `Arc` and only ever reads it, so concurrent callers need no locking
/// here.
#[derive(Clone)]
pub struct LogConfig {
    /// Records below this threshold are discarded before the interceptor
    /// chain runs.
    pub min_level: LevelFilter,
    /// Default tag for records logged without an explicit one.
    pub tag: String,
    /// Prepend a line naming the calling thread.
    pub thread_info: bool,
    /// Capture a best-effort stack trace of the call site.
    pub stack_trace: Option<StackTraceConfig>,
    /// Surround the composed message with a box-drawing border.
    pub border: bool,
    /// Layout used to turn a record into one output line.
    pub flattener: Arc<dyn Flatten>,
    /// Applied in registration order; see [`Interceptor`].
    pub interceptors: Vec<Interceptor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackTraceConfig {
    /// Number of frames to keep, 0 for no limit.
    pub depth: usize,
    /// Frames whose symbol contains this origin are skipped; set it to
    /// your wrapper module's path when logging through a wrapper.
    pub origin: Option<String>,
}

impl LogConfig {
    pub fn builder() -> LogConfigBuilder {
        LogConfigBuilder {
            min_level: LevelFilter::All,
            tag: DEFAULT_TAG.to_string(),
            thread_info: false,
            stack_trace: None,
            border: false,
            flattener: Arc::new(ClassicFlattener),
            interceptors: Vec::new(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig::builder().build()
    }
}

impl fmt::Debug for LogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogConfig")
            .field("min_level", &self.min_level)
            .field("tag", &self.tag)
            .field("thread_info", &self.thread_info)
            .field("stack_trace", &self.stack_trace)
            .field("border", &self.border)
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}

pub struct LogConfigBuilder {
    min_level: LevelFilter,
    tag: String,
    thread_info: bool,
    stack_trace: Option<StackTraceConfig>,
    border: bool,
    flattener: Arc<dyn Flatten>,
    interceptors: Vec<Interceptor>,
}

impl LogConfigBuilder {
    pub fn min_level(mut self, min_level: LevelFilter) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn thread_info(mut self, enabled: bool) -> Self {
        self.thread_info = enabled;
        self
    }

    /// Enable stack traces limited to `depth` frames (0 = no limit).
    pub fn stack_trace(mut self, depth: usize) -> Self {
        self.stack_trace = Some(StackTraceConfig {
            depth,
            origin: None,
        });
        self
    }

    /// Enable stack traces, skipping frames from `origin` (a wrapper
    /// package or module path).
    pub fn stack_trace_from(mut self, origin: impl Into<String>, depth: usize) -> Self {
        self.stack_trace = Some(StackTraceConfig {
            depth,
            origin: Some(origin.into()),
        });
        self
    }

    pub fn border(mut self, enabled: bool) -> Self {
        self.border = enabled;
        self
    }

    pub fn flattener(mut self, flattener: impl Flatten + 'static) -> Self {
        self.flattener = Arc::new(flattener);
        self
    }

    /// Append an interceptor; the chain runs in the order of these calls.
    pub fn interceptor(mut self, interceptor: Interceptor) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn build(self) -> LogConfig {
        LogConfig {
            min_level: self.min_level,
            tag: self.tag,
            thread_info: self.thread_info,
            stack_trace: self.stack_trace,
            border: self.border,
            flattener: self.flattener,
            interceptors: self.interceptors,
        }
    }
}
