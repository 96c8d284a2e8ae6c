//! Sequential line reader for store files
//!
//! A missing file reads as an empty store. Any line that fails to decode
//! ends the scan with `HOSP_MALFORMED_RECORD`; nothing after it is yielded.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};
use crate::observability::{log_event_with_fields, Event};
use crate::record::{decode, LineRecord};

/// Opens a store file for reading, mapping "not found" to `None`.
pub(crate) fn open_existing(path: &Path) -> StoreResult<Option<BufReader<File>>> {
    match File::open(path) {
        Ok(file) => Ok(Some(BufReader::new(file))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let path_str = path.display().to_string();
            log_event_with_fields(Event::StoreMissing, &[("path", path_str.as_str())]);
            Ok(None)
        }
        Err(e) => Err(StoreError::file_unavailable(
            path,
            "Failed to open store file",
            e,
        )),
    }
}

/// Iterator over the decoded records of one store file, in file order.
///
/// The file handle is released when the scan is dropped, including after an
/// early return on the first match or the first error.
pub struct RecordScan<R> {
    path: PathBuf,
    lines: Option<Lines<BufReader<File>>>,
    line_number: usize,
    _record: PhantomData<fn() -> R>,
}

impl<R: LineRecord> RecordScan<R> {
    /// Opens a scan over `path`; an absent file yields nothing
    pub fn open(path: &Path) -> StoreResult<Self> {
        let lines = open_existing(path)?.map(|reader| reader.lines());
        Ok(Self {
            path: path.to_path_buf(),
            lines,
            line_number: 0,
            _record: PhantomData,
        })
    }

    /// 1-based number of the last line read
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn fail(&mut self, error: StoreError) -> StoreError {
        // Fuse: no records are yielded past a bad line.
        self.lines = None;
        let line = self.line_number.to_string();
        let path = self.path.display().to_string();
        log_event_with_fields(
            Event::MalformedLine,
            &[
                ("kind", R::KIND),
                ("line", line.as_str()),
                ("path", path.as_str()),
            ],
        );
        error
    }
}

impl<R: LineRecord> Iterator for RecordScan<R> {
    type Item = StoreResult<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let next_line = self.lines.as_mut()?.next()?;
        self.line_number += 1;

        let line = match next_line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                let err = StoreError::unreadable_line(&self.path, self.line_number, e);
                return Some(Err(self.fail(err)));
            }
            Err(e) => {
                self.lines = None;
                return Some(Err(StoreError::file_unavailable(
                    &self.path,
                    "Failed to read store file",
                    e,
                )));
            }
        };

        match decode::<R>(&line) {
            Ok(record) => Some(Ok(record)),
            Err(e) => {
                let err = StoreError::malformed_at_line(&self.path, self.line_number, e);
                Some(Err(self.fail(err)))
            }
        }
    }
}
