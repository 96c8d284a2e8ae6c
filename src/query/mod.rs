//! In-memory queries over loaded records
//!
//! Filters and sorts work on a slice obtained from `RecordStore::load_all`;
//! the hospital directory resolves patient references by scanning the
//! hospital store.

mod filters;
mod sorter;
mod xref;

pub use filters::filter_by_city;
pub use sorter::{
    by_available_beds_descending, by_bed_price_descending, by_name_ascending,
    by_rating_then_reviews_descending, HospitalSort,
};
pub use xref::{HospitalDirectory, PatientView, UNKNOWN_HOSPITAL};
