#![allow(dead_code)]

use fanlog::level::Level;
use fanlog::sink::LogSink;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Records every emit so tests can assert on exactly what reached the sink.
pub struct SpySink {
    records: Mutex<Vec<(Level, String, String)>>,
}

impl SpySink {
    pub fn new() -> Arc<Self> {
        Arc::new(SpySink {
            records: Mutex::new(Vec::new()),
        })
    }

    pub fn records(&self) -> Vec<(Level, String, String)> {
        self.records.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .map(|(_, _, line)| line)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl LogSink for SpySink {
    fn emit(&self, level: Level, tag: &str, line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.records
            .lock()
            .unwrap()
            .push((level, tag.to_string(), line.to_string()));
        Ok(())
    }
}

/// A sink whose emit always fails with an I/O-style error.
pub struct FailingSink;

impl LogSink for FailingSink {
    fn emit(
        &self,
        _level: Level,
        _tag: &str,
        _line: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Err("emit always fails".into())
    }
}
