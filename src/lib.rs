//! hospitaldb - hospital, patient and account records in plain text files
//!
//! Each record type lives in its own pipe-delimited, append-only text file.
//! On top of the stores sit in-memory queries over hospitals, a resolver
//! from patients to hospital names, and a username/password gate in front
//! of the interactive menu.

pub mod auth;
pub mod cli;
pub mod config;
pub mod observability;
pub mod query;
pub mod record;
pub mod storage;
