//! Logging collaborator handed to the text extractor.
//!
//! Extraction reports what happened through this trait instead of global macros,
//! so callers decide where events go. `TracingLogger` is the production default.

use std::sync::Mutex;

use tracing::{debug, error, warn};

pub trait ExtractLogger: Send + Sync {
    fn debug(&self, event: &str, detail: &str);
    fn warn(&self, event: &str, detail: &str);
    fn error(&self, event: &str, detail: &str);
}

/// Forwards events to `tracing` with a `component` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ExtractLogger for TracingLogger {
    fn debug(&self, event: &str, detail: &str) {
        debug!(component = "extraction", event, "{detail}");
    }

    fn warn(&self, event: &str, detail: &str) {
        warn!(component = "extraction", event, "{detail}");
    }

    fn error(&self, event: &str, detail: &str) {
        error!(component = "extraction", event, "{detail}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub event: String,
    pub detail: String,
}

/// Keeps every event in memory. Used by tests and by callers that want to
/// surface extraction diagnostics alongside a result.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn has_event(&self, event: &str) -> bool {
        self.records().iter().any(|r| r.event == event)
    }

    fn push(&self, level: LogLevel, event: &str, detail: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push(LogRecord {
                level,
                event: event.to_string(),
                detail: detail.to_string(),
            });
        }
    }
}

impl ExtractLogger for RecordingLogger {
    fn debug(&self, event: &str, detail: &str) {
        self.push(LogLevel::Debug, event, detail);
    }

    fn warn(&self, event: &str, detail: &str) {
        self.push(LogLevel::Warn, event, detail);
    }

    fn error(&self, event: &str, detail: &str) {
        self.push(LogLevel::Error, event, detail);
    }
}
