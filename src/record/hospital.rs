//! Hospital record

use super::codec::{FieldReader, LineRecord, TextField};
use super::errors::RecordResult;

/// Legacy byte limit for hospital and patient names
pub const NAME_MAX: usize = 49;
/// Legacy byte limit for city names
pub const CITY_MAX: usize = 29;

/// A hospital entry.
///
/// `id` is intended to be unique but nothing enforces it; duplicate ids are
/// stored and returned like any other record.
#[derive(Debug, Clone, PartialEq)]
pub struct Hospital {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub available_beds: i32,
    /// Per-day cost, stored with 2 decimals
    pub bed_price: f64,
    /// Stored with 1 decimal, nominally 0 to 5
    pub rating: f64,
    pub reviews: i32,
}

impl Hospital {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        city: impl Into<String>,
        available_beds: i32,
        bed_price: f64,
        rating: f64,
        reviews: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            city: city.into(),
            available_beds,
            bed_price,
            rating,
            reviews,
        }
    }
}

impl LineRecord for Hospital {
    const KIND: &'static str = "hospital";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "city",
        "available_beds",
        "bed_price",
        "rating",
        "reviews",
    ];

    fn text_fields(&self) -> Vec<TextField<'_>> {
        vec![
            TextField::new("name", &self.name, NAME_MAX),
            TextField::new("city", &self.city, CITY_MAX),
        ]
    }

    fn decimal_fields(&self) -> Vec<(&'static str, f64)> {
        vec![("bed_price", self.bed_price), ("rating", self.rating)]
    }

    fn encode_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.city.clone(),
            self.available_beds.to_string(),
            format!("{:.2}", self.bed_price),
            format!("{:.1}", self.rating),
            self.reviews.to_string(),
        ]
    }

    fn decode_fields(fields: &mut FieldReader<'_>) -> RecordResult<Self> {
        Ok(Self {
            id: fields.int()?,
            name: fields.text()?,
            city: fields.text()?,
            available_beds: fields.int()?,
            bed_price: fields.float()?,
            rating: fields.float()?,
            reviews: fields.int()?,
        })
    }
}
