//! Storage error types
//!
//! Error codes:
//! - HOSP_FILE_UNAVAILABLE: store file cannot be opened, read or written
//! - HOSP_MALFORMED_RECORD: a stored line does not decode
//! - HOSP_INVALID_FIELD: a record cannot be encoded, nothing was written
//!
//! None of these is fatal; the failing operation aborts and the caller
//! carries on.

use std::fmt;
use std::io;
use std::path::Path;

use crate::record::{RecordError, RecordErrorCode};

/// Storage-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// Disk I/O failure on open, read or write
    HospFileUnavailable,
    /// Stored line failed to decode
    HospMalformedRecord,
    /// Record rejected before reaching the file
    HospInvalidField,
}

impl StoreErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::HospFileUnavailable => "HOSP_FILE_UNAVAILABLE",
            StoreErrorCode::HospMalformedRecord => "HOSP_MALFORMED_RECORD",
            StoreErrorCode::HospInvalidField => "HOSP_INVALID_FIELD",
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Storage error type with file and line context
#[derive(Debug)]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
    /// File path and, for decode failures, the 1-based line number
    details: Option<String>,
    line: Option<usize>,
    io_source: Option<io::Error>,
    record_source: Option<RecordError>,
}

impl StoreError {
    /// The store file could not be opened, read or written
    pub fn file_unavailable(path: &Path, message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::HospFileUnavailable,
            message: message.into(),
            details: Some(format!("path: {}", path.display())),
            line: None,
            io_source: Some(source),
            record_source: None,
        }
    }

    /// A stored line failed to decode
    pub fn malformed_at_line(path: &Path, line: usize, source: RecordError) -> Self {
        Self {
            code: StoreErrorCode::HospMalformedRecord,
            message: source.to_string(),
            details: Some(format!("path: {}, line: {}", path.display(), line)),
            line: Some(line),
            io_source: None,
            record_source: Some(source),
        }
    }

    /// A stored line is not valid UTF-8 text
    pub fn unreadable_line(path: &Path, line: usize, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::HospMalformedRecord,
            message: format!("line is not valid text: {}", source),
            details: Some(format!("path: {}, line: {}", path.display(), line)),
            line: Some(line),
            io_source: Some(source),
            record_source: None,
        }
    }

    /// A record was rejected by the encoder before any write
    pub fn invalid_record(source: RecordError) -> Self {
        let code = match source.code() {
            RecordErrorCode::HospInvalidField => StoreErrorCode::HospInvalidField,
            RecordErrorCode::HospMalformedRecord => StoreErrorCode::HospMalformedRecord,
        };
        Self {
            code,
            message: source.to_string(),
            details: None,
            line: None,
            io_source: None,
            record_source: Some(source),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns additional error details
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// 1-based line number of a decode failure
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// The codec error behind this failure, if any
    pub fn record_error(&self) -> Option<&RecordError> {
        self.record_source.as_ref()
    }

    pub fn is_malformed(&self) -> bool {
        self.code == StoreErrorCode::HospMalformedRecord
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Some(ref e) = self.io_source {
            return Some(e);
        }
        self.record_source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<RecordError> for StoreError {
    fn from(e: RecordError) -> Self {
        Self::invalid_record(e)
    }
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
