use crate::config::LogConfig;
use crate::console::ConsoleSink;
use crate::level::Level;
use crate::logger::Logger;
use crate::sink::LogSink;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

static GLOBAL: RwLock<Option<Logger>> = RwLock::new(None);

/// Install the process-wide logger.
///
/// **Parameters**
/// - `config`: the [`LogConfig`] the logger will share read-only.
/// - `sinks`: every record admitted by the pipeline is broadcast to each
///   of these.
///
/// **Behavior**
///
/// Calling `init` again is not a hard failure: a warning is emitted on
/// stderr and the new logger takes effect (last init wins). The global
/// instance is a thin wrapper; library code should prefer passing a
/// [`Logger`] explicitly.
pub fn init(config: LogConfig, sinks: Vec<Arc<dyn LogSink>>) {
    let logger = Logger::new(config, sinks);
    let mut slot = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    if slot.is_some() {
        eprintln!("fanlog is already initialized, replacing the previous logger");
    }
    *slot = Some(logger);
}

/// Initialize with the default console sink.
///
/// Equivalent to calling [`init`] with a single [`ConsoleSink`]. This is
/// the recommended entrypoint for simple binaries.
pub fn init_with_defaults(config: LogConfig) {
    init(config, vec![Arc::new(ConsoleSink::new())]);
}

pub fn is_initialized() -> bool {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// The process-wide logger.
///
/// **Panics** when called before [`init`]: logging before setup is a
/// programming error and is surfaced immediately rather than silently
/// dropped.
pub fn logger() -> Logger {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .expect("fanlog is not initialized, call fanlog::init first")
}

pub fn v(msg: impl fmt::Display) {
    logger().v(msg);
}

pub fn d(msg: impl fmt::Display) {
    logger().d(msg);
}

pub fn i(msg: impl fmt::Display) {
    logger().i(msg);
}

pub fn w(msg: impl fmt::Display) {
    logger().w(msg);
}

pub fn e(msg: impl fmt::Display) {
    logger().e(msg);
}

pub fn a(msg: impl fmt::Display) {
    logger().a(msg);
}

pub fn log(level: Level, msg: impl fmt::Display) {
    logger().log(level, msg);
}

pub fn log_err(level: Level, msg: impl fmt::Display, err: &(dyn Error + 'static)) {
    logger().log_err(level, msg, err);
}

/// Flush every sink of the process-wide logger, best-effort.
pub fn flush() {
    logger().flush();
}
