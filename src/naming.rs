use chrono::{DateTime, Utc};

/// Decides the name of the active log file.
///
/// `Changeless` always reuses one file; `Daily` derives the name from the
/// UTC date, so the file sink switches to a new file at the date boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingPolicy {
    Changeless(String),
    Daily,
}

impl NamingPolicy {
    pub fn changeless(name: impl Into<String>) -> Self {
        NamingPolicy::Changeless(name.into())
    }

    pub fn file_name(&self, now: DateTime<Utc>) -> String {
        match self {
            NamingPolicy::Changeless(name) => name.clone(),
            NamingPolicy::Daily => now.format("%Y-%m-%d").to_string(),
        }
    }
}
