use chrono::{DateTime, Utc};

use crate::sink::Severity;

/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **renderable** (`Display` produces the human-readable log line)
/// - **leveled** (each event knows how loudly it should be reported)
pub trait Event: Clone + core::fmt::Debug + core::fmt::Display + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.stock.added").
    fn event_type(&self) -> &'static str;

    /// Level the event is reported at.
    fn severity(&self) -> Severity;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
