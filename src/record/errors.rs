//! Record codec error types
//!
//! Error codes:
//! - HOSP_MALFORMED_RECORD: a line does not parse into the expected fields
//! - HOSP_INVALID_FIELD: a record cannot be written as a single line

use std::fmt;

/// Codec error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordErrorCode {
    /// Wrong field count or a field of the wrong type
    HospMalformedRecord,
    /// A string field contains the delimiter, a line break, or exceeds its limit
    HospInvalidField,
}

impl RecordErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            RecordErrorCode::HospMalformedRecord => "HOSP_MALFORMED_RECORD",
            RecordErrorCode::HospInvalidField => "HOSP_INVALID_FIELD",
        }
    }
}

impl fmt::Display for RecordErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error raised while encoding or decoding a single record line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    code: RecordErrorCode,
    /// Entity kind ("hospital", "patient", "user")
    kind: &'static str,
    /// Offending field, when one can be named
    field: Option<&'static str>,
    message: String,
}

impl RecordError {
    /// A line could not be decoded
    pub fn malformed(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            code: RecordErrorCode::HospMalformedRecord,
            kind,
            field: None,
            message: message.into(),
        }
    }

    /// A specific field of a line could not be decoded
    pub fn malformed_field(
        kind: &'static str,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: RecordErrorCode::HospMalformedRecord,
            kind,
            field: Some(field),
            message: message.into(),
        }
    }

    /// A field value cannot be written in the line format
    pub fn invalid_field(
        kind: &'static str,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: RecordErrorCode::HospInvalidField,
            kind,
            field: Some(field),
            message: message.into(),
        }
    }

    pub fn code(&self) -> RecordErrorCode {
        self.code
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn field(&self) -> Option<&'static str> {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} record", self.code.code(), self.kind)?;
        if let Some(field) = self.field {
            write!(f, " field '{}'", field)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for RecordError {}

/// Result type for codec operations
pub type RecordResult<T> = Result<T, RecordError>;
