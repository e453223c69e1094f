//! Observability subsystem for rentalcat
//!
//! - Structured logging (JSON, one line per event)
//! - Counter metrics
//! - Typed lifecycle events
//!
//! Observability is read-only: it never changes query results.
//!
//! # Usage
//!
//! ```ignore
//! use rentalcat::observability::{Logger, Event, MetricsRegistry};
//!
//! Logger::info("QUERY_EXECUTED", &[("returned", "42")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_queries_executed();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    if event.is_fatal() {
        Logger::fatal(event.as_str(), fields);
    } else {
        Logger::info(event.as_str(), fields);
    }
}
