//! Diagnostic event sinks (mechanics only).
//!
//! A sink is where the store reports what it did: every operation emits
//! human-readable `(severity, message)` pairs. The store never writes to a
//! console or a file itself, which keeps its state logic testable without
//! capturing output.
//!
//! - [`TracingSink`](crate::TracingSink) forwards to `tracing` (production).
//! - [`InMemorySink`](crate::InMemorySink) records messages (tests).

use std::sync::Arc;

use crate::event::Event;

/// Level of a diagnostic message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver of leveled diagnostic messages.
///
/// Emission is best-effort and infallible: a sink that cannot deliver a message
/// drops it rather than failing the operation that produced it.
pub trait EventSink: Send + Sync {
    fn emit(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.emit(Severity::Info, message);
    }

    fn warning(&self, message: &str) {
        self.emit(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }

    /// Render a domain event and emit it at its own severity.
    fn publish<E: Event>(&self, event: &E)
    where
        Self: Sized,
    {
        self.emit(event.severity(), &event.to_string());
    }
}

impl<S> EventSink for Arc<S>
where
    S: EventSink,
{
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message)
    }

    fn publish<E: Event>(&self, event: &E) {
        (**self).publish(event)
    }
}
