//! Record codec for hospitaldb
//!
//! Hospitals, patients and users each map to one pipe-delimited text line.
//!
//! # Design Principles
//!
//! - Fixed field order per entity, no header, no escaping
//! - Decode failures are reported, never zero-filled
//! - Values that cannot be written as one line are rejected on encode

mod codec;
mod errors;
mod hospital;
mod patient;
mod user;

pub use codec::{
    decode, encode, FieldLimits, FieldReader, LineRecord, TextField, DELIMITER, LEGACY_LINE_LIMIT,
};
pub use errors::{RecordError, RecordErrorCode, RecordResult};
pub use hospital::{Hospital, CITY_MAX, NAME_MAX};
pub use patient::{Patient, DISEASE_MAX};
pub use user::{User, PASSWORD_MAX, USERNAME_MAX};
