//! Hospital name lookup for patient listings
//!
//! The lookup scans the hospital store from the top on every call and stops
//! at the first record with a matching id. Duplicate ids resolve to the
//! earliest record.

use crate::observability::{log_event_with_fields, Event};
use crate::record::{Hospital, Patient};
use crate::storage::{RecordStore, StoreResult};

/// Name returned when a hospital id cannot be resolved
pub const UNKNOWN_HOSPITAL: &str = "Unknown";

/// Resolves hospital ids against a hospital store.
#[derive(Debug, Clone)]
pub struct HospitalDirectory<'a> {
    hospitals: &'a RecordStore<Hospital>,
}

impl<'a> HospitalDirectory<'a> {
    pub fn new(hospitals: &'a RecordStore<Hospital>) -> Self {
        Self { hospitals }
    }

    /// First hospital with `id`.
    ///
    /// `Ok(None)` means no record matched. A malformed line before the match
    /// is an error, not a miss.
    pub fn find_hospital(&self, id: i32) -> StoreResult<Option<Hospital>> {
        for record in self.hospitals.scan()? {
            let hospital = record?;
            if hospital.id == id {
                return Ok(Some(hospital));
            }
        }
        Ok(None)
    }

    /// Display name for `id`, or `"Unknown"`.
    ///
    /// Never fails: a missing id, a missing or unreadable file and a
    /// malformed line all resolve to the sentinel.
    pub fn name_for_hospital_id(&self, id: i32) -> String {
        match self.find_hospital(id) {
            Ok(Some(hospital)) => hospital.name,
            Ok(None) => UNKNOWN_HOSPITAL.to_string(),
            Err(e) => {
                let id = id.to_string();
                let reason = e.to_string();
                log_event_with_fields(
                    Event::HospitalLookupFallback,
                    &[("hospital_id", id.as_str()), ("reason", reason.as_str())],
                );
                UNKNOWN_HOSPITAL.to_string()
            }
        }
    }

    /// Pairs each patient with the name of its hospital
    pub fn resolve_patients(&self, patients: Vec<Patient>) -> Vec<PatientView> {
        patients
            .into_iter()
            .map(|patient| {
                let hospital_name = self.name_for_hospital_id(patient.hospital_id);
                PatientView {
                    patient,
                    hospital_name,
                }
            })
            .collect()
    }
}

/// A patient with its hospital reference resolved for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientView {
    pub patient: Patient,
    pub hospital_name: String,
}
