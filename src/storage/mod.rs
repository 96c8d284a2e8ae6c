//! Record storage for hospitaldb
//!
//! Each entity type lives in its own append-only text file, one record per
//! line, in insertion order.
//!
//! # Design Principles
//!
//! - Append-only (no in-place updates, no deletes)
//! - Absent file reads as an empty store
//! - Every load re-reads the whole file; no index, no cache
//! - A malformed line fails the load that hit it
//! - Appends are a single write followed by fsync

mod data_dir;
mod errors;
mod reader;
mod store;

pub use data_dir::Stores;
pub use errors::{StoreError, StoreErrorCode, StoreResult};
pub use reader::RecordScan;
pub use store::RecordStore;
