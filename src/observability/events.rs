//! Observable events for hospitaldb
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events in hospitaldb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// Data directory initialized
    DataDirInitialized,
    /// Interactive session started
    SessionStart,
    /// Interactive session ended
    SessionEnd,

    // Store operations
    /// Record appended to a store file
    RecordAppended,
    /// Append failed; nothing was written
    RecordAppendFailed,
    /// Store file fully loaded
    StoreLoaded,
    /// Store file read as empty because it does not exist
    StoreMissing,
    /// A store line failed to decode
    MalformedLine,

    // Lookups
    /// Hospital name lookup fell back to the sentinel
    HospitalLookupFallback,

    // Authentication
    /// New account created
    SignupComplete,
    /// Signup rejected because the username exists
    SignupRejected,
    /// Login accepted
    LoginSucceeded,
    /// Login rejected
    LoginFailed,

    // Presentation
    /// A menu action failed and was abandoned
    ActionFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DataDirInitialized => "DATA_DIR_INITIALIZED",
            Event::SessionStart => "SESSION_BEGIN",
            Event::SessionEnd => "SESSION_END",

            Event::RecordAppended => "RECORD_APPENDED",
            Event::RecordAppendFailed => "RECORD_APPEND_FAILED",
            Event::StoreLoaded => "STORE_LOADED",
            Event::StoreMissing => "STORE_MISSING",
            Event::MalformedLine => "MALFORMED_LINE",

            Event::HospitalLookupFallback => "HOSPITAL_LOOKUP_FALLBACK",

            Event::SignupComplete => "SIGNUP_COMPLETE",
            Event::SignupRejected => "SIGNUP_REJECTED",
            Event::LoginSucceeded => "LOGIN_SUCCEEDED",
            Event::LoginFailed => "LOGIN_FAILED",

            Event::ActionFailed => "ACTION_FAILED",
        }
    }

    /// Default severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::StoreLoaded | Event::StoreMissing => Severity::Trace,
            Event::MalformedLine
            | Event::HospitalLookupFallback
            | Event::SignupRejected
            | Event::LoginFailed => Severity::Warn,
            Event::RecordAppendFailed | Event::ActionFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::ConfigLoaded,
            Event::DataDirInitialized,
            Event::SessionStart,
            Event::SessionEnd,
            Event::RecordAppended,
            Event::RecordAppendFailed,
            Event::StoreLoaded,
            Event::StoreMissing,
            Event::MalformedLine,
            Event::HospitalLookupFallback,
            Event::SignupComplete,
            Event::SignupRejected,
            Event::LoginSucceeded,
            Event::LoginFailed,
            Event::ActionFailed,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_severities() {
        assert_eq!(Event::StoreLoaded.severity(), Severity::Trace);
        assert_eq!(Event::RecordAppended.severity(), Severity::Info);
        assert_eq!(Event::LoginFailed.severity(), Severity::Warn);
        assert_eq!(Event::RecordAppendFailed.severity(), Severity::Error);
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::SessionStart), "SESSION_BEGIN");
        assert_eq!(
            format!("{}", Event::HospitalLookupFallback),
            "HOSPITAL_LOOKUP_FALLBACK"
        );
    }
}
