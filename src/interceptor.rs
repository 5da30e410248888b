use crate::record::LogRecord;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

type RejectFn = Arc<dyn Fn(&LogRecord) -> bool + Send + Sync>;
type TransformFn = Arc<dyn Fn(LogRecord) -> LogRecord + Send + Sync>;

/// One step of the record pipeline, applied in registration order before
/// dispatch.
///
/// A `Filter` rejects records; a rejection short-circuits the chain and the
/// record never reaches any sink. A `Transform` rewrites the record (tag,
/// message, level) by producing a new one.
#[derive(Clone)]
pub enum Interceptor {
    Filter(RejectFn),
    Transform(TransformFn),
}

impl Interceptor {
    /// Filter that rejects a record when `reject` returns true.
    pub fn reject_when<F>(reject: F) -> Self
    where
        F: Fn(&LogRecord) -> bool + Send + Sync + 'static,
    {
        Interceptor::Filter(Arc::new(reject))
    }

    /// Transform that replaces the record with `map(record)`.
    pub fn transform<F>(map: F) -> Self
    where
        F: Fn(LogRecord) -> LogRecord + Send + Sync + 'static,
    {
        Interceptor::Transform(Arc::new(map))
    }

    /// Reject records whose message contains any of the given tokens
    /// (case-sensitive containment).
    pub fn deny_messages<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = collect(tokens);
        Interceptor::reject_when(move |record| contains_any(&record.message, &tokens))
    }

    /// Reject records whose message contains none of the given tokens.
    /// An empty token set rejects every record.
    pub fn allow_messages<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = collect(tokens);
        Interceptor::reject_when(move |record| !contains_any(&record.message, &tokens))
    }

    /// Reject records whose tag contains any of the given tokens.
    pub fn deny_tags<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = collect(tokens);
        Interceptor::reject_when(move |record| contains_any(&record.tag, &tokens))
    }

    /// Reject records whose tag contains none of the given tokens.
    /// An empty token set rejects every record.
    pub fn allow_tags<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = collect(tokens);
        Interceptor::reject_when(move |record| !contains_any(&record.tag, &tokens))
    }

    /// Apply this interceptor. `None` means the record was rejected.
    pub fn apply(&self, record: LogRecord) -> Option<LogRecord> {
        match self {
            Interceptor::Filter(reject) => {
                if reject(&record) {
                    None
                } else {
                    Some(record)
                }
            }
            Interceptor::Transform(map) => Some(map(record)),
        }
    }
}

fn collect<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tokens.into_iter().map(Into::into).collect()
}

fn contains_any(haystack: &str, tokens: &[String]) -> bool {
    tokens.iter().any(|token| haystack.contains(token.as_str()))
}

/// Run the chain in registration order. A rejection or a panicking
/// interceptor drops the current record (fail-closed) without affecting
/// subsequent records.
pub(crate) fn run(chain: &[Interceptor], mut record: LogRecord) -> Option<LogRecord> {
    for interceptor in chain {
        let step = panic::catch_unwind(AssertUnwindSafe(|| interceptor.apply(record.clone())));
        record = match step {
            Ok(Some(next)) => next,
            Ok(None) => return None,
            Err(_) => {
                eprintln!("fanlog: interceptor panicked, dropping the record");
                return None;
            }
        };
    }
    Some(record)
}
