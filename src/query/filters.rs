//! Hospital filtering
//!
//! Exact match only: case-sensitive, no trimming, no partial matches.

use crate::record::Hospital;

/// Hospitals whose city equals `city` exactly, in their original order.
///
/// An empty result is not an error.
pub fn filter_by_city(records: &[Hospital], city: &str) -> Vec<Hospital> {
    records
        .iter()
        .filter(|hospital| hospital.city == city)
        .cloned()
        .collect()
}
