//! Observable lifecycle events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in rentalcat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Record store populated
    DatasetLoaded,
    /// HTTP listener bound, ready to serve
    ServerListening,
    /// Startup failed (FATAL)
    BootFailed,

    // Query processing
    /// A listing query completed
    QueryExecuted,
    /// A lookup found nothing
    LookupMiss,
}

impl Event {
    /// Returns the event name as logged
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::BootFailed => "BOOT_FAILED",
            Event::QueryExecuted => "QUERY_EXECUTED",
            Event::LookupMiss => "LOOKUP_MISS",
        }
    }

    /// Returns true if this event means the process cannot continue
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
