//! Stockroom event primitives and diagnostic sinks.
//!
//! This crate is intentionally small: it defines what an event is, how events
//! are rendered as `(severity, message)` pairs, and where those pairs go.

pub mod event;
pub mod handler;
pub mod in_memory_sink;
pub mod sink;
pub mod tracing_sink;

pub use event::Event;
pub use handler::execute;
pub use in_memory_sink::{InMemorySink, SinkRecord};
pub use sink::{EventSink, Severity};
pub use tracing_sink::TracingSink;
