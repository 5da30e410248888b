use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a single log record, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    Assert,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Verbose,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Assert,
    ];

    /// One-letter name used by the classic line layout.
    pub fn short_name(self) -> &'static str {
        match self {
            Level::Verbose => "V",
            Level::Debug => "D",
            Level::Info => "I",
            Level::Warn => "W",
            Level::Error => "E",
            Level::Assert => "A",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Verbose => write!(f, "VERBOSE"),
            Level::Debug => write!(f, "DEBUG"),
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
            Level::Error => write!(f, "ERROR"),
            Level::Assert => write!(f, "ASSERT"),
        }
    }
}

/// Threshold a record's level is gated against before it enters the
/// interceptor chain.
///
/// `All` admits every level and `Off` admits none; `AtLeast(l)` admits a
/// record iff its level is `l` or more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelFilter {
    All,
    AtLeast(Level),
    Off,
}

impl LevelFilter {
    pub fn admits(self, level: Level) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::AtLeast(min) => level >= min,
            LevelFilter::Off => false,
        }
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        LevelFilter::All
    }
}
