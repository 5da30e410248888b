pub mod level;
pub mod record;
pub mod interceptor;
pub mod flatten;
pub mod sink;
pub mod console;
pub mod noop_sink;
pub mod dispatch;
pub mod naming;
pub mod backup;
pub mod clean;
pub mod file_sink;
pub mod config;
pub mod logger;
pub mod init;

#[cfg(feature = "platform")]
pub mod platform;

pub use config::LogConfig;
pub use init::{flush, init, init_with_defaults, is_initialized, logger};
pub use init::{a, d, e, i, log, log_err, v, w};
pub use level::{Level, LevelFilter};
pub use logger::Logger;
pub use record::LogRecord;
pub use sink::LogSink;
