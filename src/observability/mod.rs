//! Observability for hospitaldb
//!
//! Structured JSON log lines on stderr, one per event.
//!
//! # Usage
//!
//! ```ignore
//! use hospitaldb::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::RecordAppended, &[("kind", "hospital")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a typed event at its default severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a typed event with fields at its default severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
