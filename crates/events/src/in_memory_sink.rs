//! In-memory sink for tests/dev.

use std::sync::Mutex;

use crate::event::Event;
use crate::sink::{EventSink, Severity};

/// One recorded `(severity, message)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkRecord {
    pub severity: Severity,
    pub message: String,
    /// Set when the message came from a published domain event.
    pub event_type: Option<&'static str>,
}

/// Sink that keeps every message in order.
///
/// Share it with a store through `Arc<InMemorySink>` and inspect it afterwards.
#[derive(Debug, Default)]
pub struct InMemorySink {
    records: Mutex<Vec<SinkRecord>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn records(&self) -> Vec<SinkRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(_) => vec![],
        }
    }

    /// Messages emitted at exactly `severity`, in order.
    pub fn messages_at(&self, severity: Severity) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.severity == severity)
            .map(|r| r.message)
            .collect()
    }

    /// Types of the published domain events, in order.
    pub fn event_types(&self) -> Vec<&'static str> {
        self.records().into_iter().filter_map(|r| r.event_type).collect()
    }

    fn push(&self, record: SinkRecord) {
        // A poisoned lock only happens if a test panicked mid-emit; drop the message.
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl EventSink for InMemorySink {
    fn emit(&self, severity: Severity, message: &str) {
        self.push(SinkRecord {
            severity,
            message: message.to_string(),
            event_type: None,
        });
    }

    fn publish<E: Event>(&self, event: &E) {
        self.push(SinkRecord {
            severity: event.severity(),
            message: event.to_string(),
            event_type: Some(event.event_type()),
        });
    }
}
