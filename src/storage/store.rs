//! Append-only record store backed by one text file
//!
//! - One record per line, insertion order == file order
//! - No in-place updates, no deletes
//! - Absent file == empty store
//! - Each call opens and closes the file; nothing is cached

use std::fs::{self, OpenOptions};
use std::io::{BufRead, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};
use super::reader::{open_existing, RecordScan};
use crate::observability::{log_event_with_fields, Event};
use crate::record::{encode, FieldLimits, LineRecord};

/// File-backed collection of one record type.
pub struct RecordStore<R> {
    path: PathBuf,
    limits: FieldLimits,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for RecordStore<R> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            limits: self.limits,
            _record: PhantomData,
        }
    }
}

impl<R> std::fmt::Debug for RecordStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("path", &self.path)
            .field("limits", &self.limits)
            .finish()
    }
}

impl<R: LineRecord> RecordStore<R> {
    /// Creates a store handle for `path`. The file is not touched.
    pub fn new(path: impl Into<PathBuf>, limits: FieldLimits) -> Self {
        Self {
            path: path.into(),
            limits,
            _record: PhantomData,
        }
    }

    /// Returns the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the length policy applied on append.
    pub fn limits(&self) -> FieldLimits {
        self.limits
    }

    /// Number of lines in the backing file; 0 if the file is absent.
    ///
    /// Lines are counted without decoding them.
    pub fn count(&self) -> StoreResult<usize> {
        let reader = match open_existing(&self.path)? {
            Some(reader) => reader,
            None => return Ok(0),
        };

        let mut count = 0;
        for chunk in reader.split(b'\n') {
            chunk.map_err(|e| {
                StoreError::file_unavailable(&self.path, "Failed to read store file", e)
            })?;
            count += 1;
        }
        Ok(count)
    }

    /// Streams decoded records in file order.
    pub fn scan(&self) -> StoreResult<RecordScan<R>> {
        RecordScan::open(&self.path)
    }

    /// Loads every record in file order.
    ///
    /// # Errors
    ///
    /// The first malformed line fails the whole load with
    /// `HOSP_MALFORMED_RECORD`; no partial result is returned.
    pub fn load_all(&self) -> StoreResult<Vec<R>> {
        let records = self.scan()?.collect::<StoreResult<Vec<R>>>()?;

        let count = records.len().to_string();
        let path = self.path.display().to_string();
        log_event_with_fields(
            Event::StoreLoaded,
            &[
                ("count", count.as_str()),
                ("kind", R::KIND),
                ("path", path.as_str()),
            ],
        );
        Ok(records)
    }

    /// Appends one record as a single line, creating the file if absent.
    ///
    /// The record is encoded before the file is opened, so a record that
    /// cannot be represented never reaches disk. The line is written with
    /// one `write_all` and then synced. If the write fails the file is cut
    /// back to its previous length.
    ///
    /// # Errors
    ///
    /// `HOSP_INVALID_FIELD` if the record cannot be encoded,
    /// `HOSP_FILE_UNAVAILABLE` if the file cannot be opened or written.
    pub fn append(&self, record: &R) -> StoreResult<()> {
        let mut line = encode(record, self.limits)?;
        line.push('\n');

        match self.write_line(&line) {
            Ok(()) => {
                let path = self.path.display().to_string();
                log_event_with_fields(
                    Event::RecordAppended,
                    &[("kind", R::KIND), ("path", path.as_str())],
                );
                Ok(())
            }
            Err(e) => {
                let path = self.path.display().to_string();
                let reason = e.to_string();
                log_event_with_fields(
                    Event::RecordAppendFailed,
                    &[
                        ("kind", R::KIND),
                        ("path", path.as_str()),
                        ("reason", reason.as_str()),
                    ],
                );
                Err(e)
            }
        }
    }

    fn write_line(&self, line: &str) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::file_unavailable(
                        &self.path,
                        format!("Failed to create directory: {}", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                StoreError::file_unavailable(&self.path, "Failed to open store file for append", e)
            })?;

        let original_len = file
            .metadata()
            .map_err(|e| StoreError::file_unavailable(&self.path, "Failed to read file metadata", e))?
            .len();

        if let Err(e) = file.write_all(line.as_bytes()) {
            // Best effort: drop any partial line.
            let _ = file.set_len(original_len);
            return Err(StoreError::file_unavailable(
                &self.path,
                "Failed to write record",
                e,
            ));
        }

        file.sync_all().map_err(|e| {
            StoreError::file_unavailable(&self.path, "fsync failed after writing record", e)
        })?;

        Ok(())
    }
}
