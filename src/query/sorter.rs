//! Hospital ordering
//!
//! Every order is stable: hospitals with equal keys keep their relative
//! input order. Sorting returns a new vector and leaves the input alone.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::record::Hospital;

/// The supported hospital orders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HospitalSort {
    /// Bed price, highest first
    BedPriceDescending,
    /// Available beds, most first
    AvailableBedsDescending,
    /// Name, byte-wise ascending
    NameAscending,
    /// Rating highest first, then reviews most first
    RatingThenReviewsDescending,
}

impl HospitalSort {
    pub const ALL: [HospitalSort; 4] = [
        HospitalSort::BedPriceDescending,
        HospitalSort::AvailableBedsDescending,
        HospitalSort::NameAscending,
        HospitalSort::RatingThenReviewsDescending,
    ];

    /// Short name used in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            HospitalSort::BedPriceDescending => "price",
            HospitalSort::AvailableBedsDescending => "beds",
            HospitalSort::NameAscending => "name",
            HospitalSort::RatingThenReviewsDescending => "rating",
        }
    }

    /// Heading shown above a sorted listing
    pub fn title(&self) -> &'static str {
        match self {
            HospitalSort::BedPriceDescending => "Bed Price",
            HospitalSort::AvailableBedsDescending => "Available Beds",
            HospitalSort::NameAscending => "Name",
            HospitalSort::RatingThenReviewsDescending => "Rating & Reviews",
        }
    }

    /// Comparator for this order
    pub fn compare(&self, a: &Hospital, b: &Hospital) -> Ordering {
        match self {
            HospitalSort::BedPriceDescending => b.bed_price.total_cmp(&a.bed_price),
            HospitalSort::AvailableBedsDescending => b.available_beds.cmp(&a.available_beds),
            HospitalSort::NameAscending => a.name.as_bytes().cmp(b.name.as_bytes()),
            HospitalSort::RatingThenReviewsDescending => b
                .rating
                .total_cmp(&a.rating)
                .then_with(|| b.reviews.cmp(&a.reviews)),
        }
    }

    /// Returns a sorted copy of `records`
    pub fn apply(&self, records: &[Hospital]) -> Vec<Hospital> {
        let mut sorted = records.to_vec();
        // slice::sort_by is stable
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }
}

impl fmt::Display for HospitalSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HospitalSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HospitalSort::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| format!("unknown sort '{}', expected price|beds|name|rating", s))
    }
}

/// Sorted by bed price, highest first
pub fn by_bed_price_descending(records: &[Hospital]) -> Vec<Hospital> {
    HospitalSort::BedPriceDescending.apply(records)
}

/// Sorted by available beds, most first
pub fn by_available_beds_descending(records: &[Hospital]) -> Vec<Hospital> {
    HospitalSort::AvailableBedsDescending.apply(records)
}

/// Sorted by name, byte-wise ascending (not locale aware)
pub fn by_name_ascending(records: &[Hospital]) -> Vec<Hospital> {
    HospitalSort::NameAscending.apply(records)
}

/// Sorted by rating, highest first; equal ratings by reviews, most first
pub fn by_rating_then_reviews_descending(records: &[Hospital]) -> Vec<Hospital> {
    HospitalSort::RatingThenReviewsDescending.apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(id: i32, bed_price: f64) -> Hospital {
        Hospital::new(id, format!("H{}", id), "Pune", 10, bed_price, 3.0, 5)
    }

    fn ids(records: &[Hospital]) -> Vec<i32> {
        records.iter().map(|h| h.id).collect()
    }

    #[test]
    fn test_price_ties_keep_input_order() {
        let records = vec![priced(1, 100.0), priced(2, 300.0), priced(3, 300.0)];
        assert_eq!(ids(&by_bed_price_descending(&records)), vec![2, 3, 1]);
    }

    #[test]
    fn test_input_not_mutated() {
        let records = vec![priced(1, 100.0), priced(2, 300.0)];
        let _ = by_bed_price_descending(&records);
        assert_eq!(ids(&records), vec![1, 2]);
    }

    #[test]
    fn test_beds_descending() {
        let mut records = Vec::new();
        for (id, beds) in [(1, 5), (2, 50), (3, 5), (4, -1), (5, 50)] {
            let mut h = priced(id, 1.0);
            h.available_beds = beds;
            records.push(h);
        }
        assert_eq!(
            ids(&by_available_beds_descending(&records)),
            vec![2, 5, 1, 3, 4]
        );
    }

    #[test]
    fn test_name_is_byte_wise() {
        let mut records = Vec::new();
        for (id, name) in [(1, "apollo"), (2, "Zeta"), (3, "Apollo"), (4, "Ápex")] {
            let mut h = priced(id, 1.0);
            h.name = name.to_string();
            records.push(h);
        }
        // Uppercase ASCII sorts before lowercase; non-ASCII after both.
        assert_eq!(ids(&by_name_ascending(&records)), vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_rating_then_reviews() {
        let mut records = Vec::new();
        for (id, rating, reviews) in [
            (1, 4.0, 10),
            (2, 4.5, 3),
            (3, 4.0, 90),
            (4, 4.0, 10),
            (5, 2.0, 500),
        ] {
            let mut h = priced(id, 1.0);
            h.rating = rating;
            h.reviews = reviews;
            records.push(h);
        }
        assert_eq!(
            ids(&by_rating_then_reviews_descending(&records)),
            vec![2, 3, 1, 4, 5]
        );
    }

    #[test]
    fn test_empty_and_single() {
        assert!(by_name_ascending(&[]).is_empty());
        assert_eq!(ids(&by_bed_price_descending(&[priced(9, 1.0)])), vec![9]);
    }

    #[test]
    fn test_sort_names_round_trip() {
        for order in HospitalSort::ALL {
            assert_eq!(order.as_str().parse::<HospitalSort>().unwrap(), order);
        }
        assert!("cost".parse::<HospitalSort>().is_err());
    }
}
