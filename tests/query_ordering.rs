//! Query Ordering Tests
//!
//! Filter and sort properties over hospitals loaded from a store, and
//! hospital name resolution for patients.

use hospitaldb::query::{
    by_available_beds_descending, by_bed_price_descending, by_name_ascending,
    by_rating_then_reviews_descending, filter_by_city, HospitalDirectory, HospitalSort,
    UNKNOWN_HOSPITAL,
};
use hospitaldb::record::{FieldLimits, Hospital, Patient};
use hospitaldb::storage::RecordStore;
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn ids(records: &[Hospital]) -> Vec<i32> {
    records.iter().map(|h| h.id).collect()
}

fn sample() -> Vec<Hospital> {
    vec![
        Hospital::new(1, "Sahyadri", "Pune", 20, 1800.0, 4.3, 200),
        Hospital::new(2, "Apollo", "Chennai", 50, 3500.0, 4.7, 900),
        Hospital::new(3, "KEM", "Pune", 50, 500.0, 4.3, 350),
        Hospital::new(4, "Jehangir", "Pune", 5, 3500.0, 4.7, 100),
        Hospital::new(5, "AIIMS", "Delhi", 120, 100.0, 4.9, 50),
    ]
}

fn hospital_store(temp_dir: &TempDir) -> RecordStore<Hospital> {
    RecordStore::new(temp_dir.path().join("hospitals.txt"), FieldLimits::Legacy)
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn test_equal_keys_keep_input_order() {
    let records = vec![
        Hospital::new(1, "A", "X", 1, 100.0, 1.0, 1),
        Hospital::new(2, "B", "X", 1, 300.0, 1.0, 1),
        Hospital::new(3, "C", "X", 1, 300.0, 1.0, 1),
    ];

    assert_eq!(ids(&by_bed_price_descending(&records)), vec![2, 3, 1]);
}

#[test]
fn test_each_order() {
    let records = sample();

    assert_eq!(ids(&by_bed_price_descending(&records)), vec![2, 4, 1, 3, 5]);
    assert_eq!(ids(&by_available_beds_descending(&records)), vec![5, 2, 3, 1, 4]);
    assert_eq!(ids(&by_name_ascending(&records)), vec![5, 2, 4, 3, 1]);
    assert_eq!(
        ids(&by_rating_then_reviews_descending(&records)),
        vec![5, 2, 4, 3, 1]
    );
}

#[test]
fn test_sort_is_a_permutation_and_leaves_input_alone() {
    let records = sample();
    let before = records.clone();

    for order in HospitalSort::ALL {
        let sorted = order.apply(&records);
        assert_eq!(sorted.len(), records.len());
        for h in &records {
            assert!(sorted.contains(h), "{} dropped id {}", order, h.id);
        }
        for pair in sorted.windows(2) {
            assert_ne!(
                order.compare(&pair[0], &pair[1]),
                std::cmp::Ordering::Greater,
                "{} out of order",
                order
            );
        }
    }

    assert_eq!(records, before);
}

#[test]
fn test_name_order_is_bytewise() {
    let records = vec![
        Hospital::new(1, "apollo", "X", 1, 1.0, 1.0, 1),
        Hospital::new(2, "Zen", "X", 1, 1.0, 1.0, 1),
        Hospital::new(3, "Apollo", "X", 1, 1.0, 1.0, 1),
    ];

    assert_eq!(ids(&by_name_ascending(&records)), vec![3, 2, 1]);
}

#[test]
fn test_sort_names_parse() {
    for order in HospitalSort::ALL {
        assert_eq!(order.as_str().parse::<HospitalSort>().unwrap(), order);
    }
    assert!("cost".parse::<HospitalSort>().is_err());
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn test_city_filter_on_loaded_records() {
    let temp_dir = TempDir::new().unwrap();
    let store = hospital_store(&temp_dir);
    for h in sample() {
        store.append(&h).unwrap();
    }

    let loaded = store.load_all().unwrap();
    let pune = filter_by_city(&loaded, "Pune");

    assert_eq!(ids(&pune), vec![1, 3, 4]);
    assert!(pune.iter().all(|h| h.city == "Pune"));
    assert!(filter_by_city(&loaded, "pune").is_empty());
    assert!(filter_by_city(&loaded, "Pune ").is_empty());
}

// =============================================================================
// Hospital Name Resolution
// =============================================================================

#[test]
fn test_resolves_known_and_unknown_ids() {
    let temp_dir = TempDir::new().unwrap();
    let store = hospital_store(&temp_dir);
    for h in sample() {
        store.append(&h).unwrap();
    }
    let directory = HospitalDirectory::new(&store);

    let views = directory.resolve_patients(vec![
        Patient::new(10, "Ann", 30, "Flu", 2),
        Patient::new(11, "Raj", 62, "Fracture", 42),
    ]);

    assert_eq!(views[0].hospital_name, "Apollo");
    assert_eq!(views[1].hospital_name, UNKNOWN_HOSPITAL);
    assert_eq!(views[1].patient.name, "Raj");
}

#[test]
fn test_duplicate_id_resolves_to_first() {
    let temp_dir = TempDir::new().unwrap();
    let store = hospital_store(&temp_dir);
    store
        .append(&Hospital::new(7, "First", "Pune", 1, 1.0, 1.0, 1))
        .unwrap();
    store
        .append(&Hospital::new(7, "Second", "Pune", 1, 1.0, 1.0, 1))
        .unwrap();

    let directory = HospitalDirectory::new(&store);
    assert_eq!(directory.name_for_hospital_id(7), "First");
}

#[test]
fn test_lookup_without_file_is_unknown() {
    let temp_dir = TempDir::new().unwrap();
    let store = hospital_store(&temp_dir);
    let directory = HospitalDirectory::new(&store);

    assert_eq!(directory.find_hospital(1).unwrap(), None);
    assert_eq!(directory.name_for_hospital_id(1), UNKNOWN_HOSPITAL);
}

#[test]
fn test_malformed_line_is_an_error_not_a_miss() {
    let temp_dir = TempDir::new().unwrap();
    let store = hospital_store(&temp_dir);
    fs::write(store.path(), "broken line\n1|A|Pune|1|1.00|1.0|1\n").unwrap();
    let directory = HospitalDirectory::new(&store);

    assert!(directory.find_hospital(1).is_err());
    assert_eq!(directory.name_for_hospital_id(1), UNKNOWN_HOSPITAL);
}
