use crate::level::Level;
use chrono::{DateTime, Utc};

/// Converts a resolved record into a single output line.
///
/// Flattening must be deterministic and side-effect-free: the same inputs
/// always yield the same line, and no I/O happens here. Pluggable layouts
/// may reorder fields or change the timestamp representation.
pub trait Flatten: Send + Sync {
    fn flatten(&self, timestamp: DateTime<Utc>, level: Level, tag: &str, message: &str) -> String;
}

/// Any matching closure is a flattener.
impl<F> Flatten for F
where
    F: Fn(DateTime<Utc>, Level, &str, &str) -> String + Send + Sync,
{
    fn flatten(&self, timestamp: DateTime<Utc>, level: Level, tag: &str, message: &str) -> String {
        self(timestamp, level, tag, message)
    }
}

/// Default layout: `2026-08-07 13:05:09.123 I/NET: connected`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicFlattener;

impl Flatten for ClassicFlattener {
    fn flatten(&self, timestamp: DateTime<Utc>, level: Level, tag: &str, message: &str) -> String {
        format!(
            "{} {}/{}: {}",
            timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            level.short_name(),
            tag,
            message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 13, 5, 9).unwrap()
    }

    #[test]
    fn classic_layout_contains_every_field_verbatim() {
        let line = ClassicFlattener.flatten(fixed_timestamp(), Level::Info, "NET", "connected");
        assert_eq!(line, "2026-08-07 13:05:09.000 I/NET: connected");
    }

    #[test]
    fn flattening_is_deterministic() {
        let ts = fixed_timestamp();
        let first = ClassicFlattener.flatten(ts, Level::Warn, "IO", "disk slow");
        let second = ClassicFlattener.flatten(ts, Level::Warn, "IO", "disk slow");
        assert_eq!(first, second);
    }

    #[test]
    fn closures_are_flatteners() {
        let pipe = |_ts: DateTime<Utc>, level: Level, tag: &str, message: &str| {
            format!("{}|{}|{}", level.short_name(), tag, message)
        };
        let line = pipe.flatten(fixed_timestamp(), Level::Error, "DB", "timeout");
        assert_eq!(line, "E|DB|timeout");
    }
}
