//! Pipe-delimited line codec
//!
//! Every record is a single line of `|`-separated fields in a fixed order:
//!
//! ```text
//! hospital: id|name|city|availableBeds|bedPrice|rating|reviews
//! patient:  id|name|age|disease|hospitalId
//! user:     username|password
//! ```
//!
//! There is no escaping. A string field holding `|` or a line break cannot be
//! written and is rejected with `HOSP_INVALID_FIELD`. On read, string fields
//! are taken verbatim (no trimming) up to the next delimiter.

use serde::{Deserialize, Serialize};

use super::errors::{RecordError, RecordResult};

/// Field separator
pub const DELIMITER: char = '|';

/// Size of the legacy reader's line buffer. A line plus its `\n` must be
/// strictly shorter than this to be read back in one piece.
pub const LEGACY_LINE_LIMIT: usize = 256;

/// Length policy applied to string fields on encode.
///
/// `Legacy` keeps every line readable by the fixed-buffer reader the file
/// format came from. `Unbounded` lifts the per-field limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldLimits {
    #[default]
    Legacy,
    Unbounded,
}

/// A string field as seen by the encoder
#[derive(Debug, Clone, Copy)]
pub struct TextField<'a> {
    pub name: &'static str,
    pub value: &'a str,
    /// Maximum length in bytes under `FieldLimits::Legacy`
    pub legacy_max: usize,
}

impl<'a> TextField<'a> {
    pub fn new(name: &'static str, value: &'a str, legacy_max: usize) -> Self {
        Self {
            name,
            value,
            legacy_max,
        }
    }
}

/// A record type with a fixed single-line representation.
pub trait LineRecord: Sized {
    /// Entity kind used in errors and logs
    const KIND: &'static str;

    /// Field names in on-disk order
    const FIELDS: &'static [&'static str];

    /// String fields subject to delimiter and length checks
    fn text_fields(&self) -> Vec<TextField<'_>>;

    /// Decimal fields, which must be finite to be written
    fn decimal_fields(&self) -> Vec<(&'static str, f64)> {
        Vec::new()
    }

    /// Formatted field values in on-disk order
    fn encode_fields(&self) -> Vec<String>;

    /// Builds the record from already-split fields
    fn decode_fields(fields: &mut FieldReader<'_>) -> RecordResult<Self>;
}

/// Encodes a record as one line, without the trailing newline.
pub fn encode<R: LineRecord>(record: &R, limits: FieldLimits) -> RecordResult<String> {
    for field in record.text_fields() {
        validate_text(R::KIND, &field, limits)?;
    }
    for (name, value) in record.decimal_fields() {
        if !value.is_finite() {
            return Err(RecordError::invalid_field(
                R::KIND,
                name,
                format!("{} is not a finite number", value),
            ));
        }
    }
    let line = record.encode_fields().join("|");
    if limits == FieldLimits::Legacy && line.len() + 1 >= LEGACY_LINE_LIMIT {
        return Err(RecordError::invalid_field(
            R::KIND,
            "line",
            format!(
                "{} bytes does not fit the {}-byte legacy line buffer",
                line.len() + 1,
                LEGACY_LINE_LIMIT
            ),
        ));
    }
    Ok(line)
}

/// Decodes one line (without its terminator) into a record.
pub fn decode<R: LineRecord>(line: &str) -> RecordResult<R> {
    let parts: Vec<&str> = line.split(DELIMITER).collect();
    if parts.len() != R::FIELDS.len() {
        return Err(RecordError::malformed(
            R::KIND,
            format!(
                "expected {} fields, found {}",
                R::FIELDS.len(),
                parts.len()
            ),
        ));
    }

    let mut reader = FieldReader {
        kind: R::KIND,
        names: R::FIELDS,
        parts,
        position: 0,
    };
    R::decode_fields(&mut reader)
}

fn validate_text(kind: &'static str, field: &TextField<'_>, limits: FieldLimits) -> RecordResult<()> {
    if field.value.contains(DELIMITER) {
        return Err(RecordError::invalid_field(
            kind,
            field.name,
            "contains the '|' delimiter",
        ));
    }
    if field.value.contains(['\n', '\r']) {
        return Err(RecordError::invalid_field(
            kind,
            field.name,
            "contains a line break",
        ));
    }
    if limits == FieldLimits::Legacy && field.value.len() > field.legacy_max {
        return Err(RecordError::invalid_field(
            kind,
            field.name,
            format!(
                "{} bytes exceeds the limit of {}",
                field.value.len(),
                field.legacy_max
            ),
        ));
    }
    Ok(())
}

/// Cursor over the split fields of one line.
///
/// Fields must be consumed in on-disk order; each read names the field it
/// consumed so parse failures can point at it.
pub struct FieldReader<'a> {
    kind: &'static str,
    names: &'static [&'static str],
    parts: Vec<&'a str>,
    position: usize,
}

impl<'a> FieldReader<'a> {
    fn next_raw(&mut self) -> RecordResult<(&'static str, &'a str)> {
        let name = self.names.get(self.position).copied().unwrap_or("?");
        let raw = self.parts.get(self.position).copied().ok_or_else(|| {
            RecordError::malformed_field(self.kind, name, "missing field")
        })?;
        self.position += 1;
        Ok((name, raw))
    }

    /// Next field as a verbatim string
    pub fn text(&mut self) -> RecordResult<String> {
        let (_, raw) = self.next_raw()?;
        Ok(raw.to_string())
    }

    /// Next field as a signed integer
    pub fn int(&mut self) -> RecordResult<i32> {
        let (name, raw) = self.next_raw()?;
        raw.parse::<i32>().map_err(|_| {
            RecordError::malformed_field(self.kind, name, format!("expected an integer, found '{}'", raw))
        })
    }

    /// Next field as a finite floating point number
    pub fn float(&mut self) -> RecordResult<f64> {
        let (name, raw) = self.next_raw()?;
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(RecordError::malformed_field(
                self.kind,
                name,
                format!("expected a number, found '{}'", raw),
            )),
        }
    }
}
