use crate::event::Event;
use crate::sink::{EventSink, Severity};

/// Sink that forwards every message to the process-wide `tracing` subscriber.
///
/// Published domain events carry their type and business time as fields, so
/// JSON logs can be filtered by event.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!("{message}"),
            Severity::Warning => tracing::warn!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        }
    }

    fn publish<E: Event>(&self, event: &E) {
        let event_type = event.event_type();
        let occurred_at = event.occurred_at().to_rfc3339();
        match event.severity() {
            Severity::Info => tracing::info!(event_type, %occurred_at, "{event}"),
            Severity::Warning => tracing::warn!(event_type, %occurred_at, "{event}"),
            Severity::Error => tracing::error!(event_type, %occurred_at, "{event}"),
        }
    }
}
