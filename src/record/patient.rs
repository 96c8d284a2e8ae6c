//! Patient record

use super::codec::{FieldReader, LineRecord, TextField};
use super::errors::RecordResult;
use super::hospital::NAME_MAX;

/// Legacy byte limit for the disease/condition field
pub const DISEASE_MAX: usize = 49;

/// A patient admission.
///
/// `hospital_id` refers to a `Hospital::id` but is never checked against
/// the hospital store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub disease: String,
    pub hospital_id: i32,
}

impl Patient {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        age: i32,
        disease: impl Into<String>,
        hospital_id: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            disease: disease.into(),
            hospital_id,
        }
    }
}

impl LineRecord for Patient {
    const KIND: &'static str = "patient";
    const FIELDS: &'static [&'static str] = &["id", "name", "age", "disease", "hospital_id"];

    fn text_fields(&self) -> Vec<TextField<'_>> {
        vec![
            TextField::new("name", &self.name, NAME_MAX),
            TextField::new("disease", &self.disease, DISEASE_MAX),
        ]
    }

    fn encode_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.age.to_string(),
            self.disease.clone(),
            self.hospital_id.to_string(),
        ]
    }

    fn decode_fields(fields: &mut FieldReader<'_>) -> RecordResult<Self> {
        Ok(Self {
            id: fields.int()?,
            name: fields.text()?,
            age: fields.int()?,
            disease: fields.text()?,
            hospital_id: fields.int()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{decode, encode, FieldLimits};

    #[test]
    fn test_encode() {
        let patient = Patient::new(11, "Asha Rao", 34, "Fractured wrist", 7);
        assert_eq!(
            encode(&patient, FieldLimits::Legacy).unwrap(),
            "11|Asha Rao|34|Fractured wrist|7"
        );
    }

    #[test]
    fn test_round_trip() {
        let patient = Patient::new(2, "Ben", 61, "Pneumonia", 99);
        let line = encode(&patient, FieldLimits::Legacy).unwrap();
        assert_eq!(decode::<Patient>(&line).unwrap(), patient);
    }

    #[test]
    fn test_missing_hospital_id_is_malformed() {
        let err = decode::<Patient>("2|Ben|61|Pneumonia").unwrap_err();
        assert!(err.message().contains("expected 5 fields, found 4"));
    }

    #[test]
    fn test_disease_with_delimiter_rejected() {
        let patient = Patient::new(2, "Ben", 61, "Flu|Cold", 1);
        let err = encode(&patient, FieldLimits::Unbounded).unwrap_err();
        assert_eq!(err.field(), Some("disease"));
    }
}
