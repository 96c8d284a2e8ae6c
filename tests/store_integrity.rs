//! Store Integrity Tests
//!
//! Properties of the append-only text stores:
//! - Absent files read as empty stores
//! - count() tracks appends, load_all() returns appends in order
//! - A rejected record never reaches disk
//! - A malformed line fails the whole load with its line number
//! - Files written by the earlier fixed-buffer program load unchanged

use hospitaldb::record::{FieldLimits, Hospital, Patient, User};
use hospitaldb::storage::{RecordStore, StoreErrorCode, Stores};
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn create_temp_data_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

fn hospital(id: i32, name: &str, city: &str) -> Hospital {
    Hospital::new(id, name, city, 10, 1200.0, 4.5, 80)
}

// =============================================================================
// Empty and Absent Stores
// =============================================================================

#[test]
fn test_absent_file_is_empty_store() {
    let temp_dir = create_temp_data_dir();
    let store: RecordStore<Hospital> =
        RecordStore::new(temp_dir.path().join("hospitals.txt"), FieldLimits::Legacy);

    assert_eq!(store.count().unwrap(), 0);
    assert!(store.load_all().unwrap().is_empty());
    assert!(!store.path().exists(), "Reads must not create the file");
}

#[test]
fn test_first_append_creates_file() {
    let temp_dir = create_temp_data_dir();
    let store: RecordStore<Patient> = RecordStore::new(
        temp_dir.path().join("nested/patients.txt"),
        FieldLimits::Legacy,
    );

    store.append(&Patient::new(1, "Ann", 30, "Flu", 1)).unwrap();

    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "1|Ann|30|Flu|1\n"
    );
}

// =============================================================================
// Append and Load
// =============================================================================

#[test]
fn test_count_tracks_appends() {
    let temp_dir = create_temp_data_dir();
    let store: RecordStore<Hospital> =
        RecordStore::new(temp_dir.path().join("hospitals.txt"), FieldLimits::Legacy);

    for id in 1..=5 {
        let before = store.count().unwrap();
        store.append(&hospital(id, "General", "Pune")).unwrap();
        assert_eq!(store.count().unwrap(), before + 1);
    }
}

#[test]
fn test_load_returns_appends_in_order() {
    let temp_dir = create_temp_data_dir();
    let store: RecordStore<Hospital> =
        RecordStore::new(temp_dir.path().join("hospitals.txt"), FieldLimits::Legacy);

    let written = vec![
        hospital(3, "Sahyadri", "Pune"),
        hospital(1, "Apollo", "Chennai"),
        hospital(3, "Sahyadri Annex", "Pune"),
    ];
    for h in &written {
        store.append(h).unwrap();
    }

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded, written, "Duplicate ids are kept, order is preserved");
}

#[test]
fn test_values_survive_round_trip() {
    let temp_dir = create_temp_data_dir();
    let store: RecordStore<Hospital> =
        RecordStore::new(temp_dir.path().join("hospitals.txt"), FieldLimits::Legacy);

    let h = Hospital::new(9, "Ruby Hall", "Pune", 0, 999.99, 3.5, 0);
    store.append(&h).unwrap();

    assert_eq!(store.load_all().unwrap(), vec![h]);
}

#[test]
fn test_empty_string_fields_round_trip() {
    let temp_dir = create_temp_data_dir();
    let store: RecordStore<User> =
        RecordStore::new(temp_dir.path().join("users.txt"), FieldLimits::Legacy);

    store.append(&User::new("", "")).unwrap();

    assert_eq!(fs::read_to_string(store.path()).unwrap(), "|\n");
    assert_eq!(store.load_all().unwrap(), vec![User::new("", "")]);
}

// =============================================================================
// Rejected Records
// =============================================================================

#[test]
fn test_delimiter_in_field_writes_nothing() {
    let temp_dir = create_temp_data_dir();
    let store: RecordStore<Hospital> =
        RecordStore::new(temp_dir.path().join("hospitals.txt"), FieldLimits::Legacy);
    store.append(&hospital(1, "General", "Pune")).unwrap();
    let before = fs::read(store.path()).unwrap();

    let err = store.append(&hospital(2, "A|B", "Pune")).unwrap_err();

    assert_eq!(err.code(), StoreErrorCode::HospInvalidField);
    assert_eq!(fs::read(store.path()).unwrap(), before);
}

#[test]
fn test_legacy_limit_and_unbounded_policy() {
    let temp_dir = create_temp_data_dir();
    let long_name = "n".repeat(60);

    let legacy: RecordStore<Hospital> =
        RecordStore::new(temp_dir.path().join("legacy.txt"), FieldLimits::Legacy);
    let err = legacy.append(&hospital(1, &long_name, "Pune")).unwrap_err();
    assert_eq!(err.code(), StoreErrorCode::HospInvalidField);
    assert_eq!(legacy.count().unwrap(), 0);

    let unbounded: RecordStore<Hospital> =
        RecordStore::new(temp_dir.path().join("unbounded.txt"), FieldLimits::Unbounded);
    unbounded.append(&hospital(1, &long_name, "Pune")).unwrap();
    assert_eq!(unbounded.load_all().unwrap()[0].name, long_name);
}

// =============================================================================
// Malformed Lines
// =============================================================================

#[test]
fn test_malformed_line_fails_load() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("hospitals.txt");
    fs::write(
        &path,
        "1|General|Pune|10|1200.00|4.5|80\n2|Broken|Pune|ten|1.00|1.0|1\n",
    )
    .unwrap();

    let store: RecordStore<Hospital> = RecordStore::new(&path, FieldLimits::Legacy);
    let err = store.load_all().unwrap_err();

    assert_eq!(err.code(), StoreErrorCode::HospMalformedRecord);
    assert_eq!(err.line(), Some(2));
    assert!(err.is_malformed());
}

#[test]
fn test_count_does_not_decode() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("patients.txt");
    fs::write(&path, "garbage\n1|Ann|30|Flu|1\n").unwrap();

    let store: RecordStore<Patient> = RecordStore::new(&path, FieldLimits::Legacy);

    assert_eq!(store.count().unwrap(), 2);
    assert!(store.load_all().is_err());
}

#[test]
fn test_scan_stops_after_first_error() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("users.txt");
    fs::write(&path, "alice|pw1\nno-delimiter\nbob|pw2\n").unwrap();

    let store: RecordStore<User> = RecordStore::new(&path, FieldLimits::Legacy);
    let results: Vec<_> = store.scan().unwrap().collect();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().username, "alice");
    assert!(results[1].is_err());
}

// =============================================================================
// Existing Files
// =============================================================================

#[test]
fn test_reads_legacy_file() {
    let temp_dir = create_temp_data_dir();
    let path = temp_dir.path().join("hospitals.txt");
    fs::write(
        &path,
        "1|City Hospital|Mumbai|25|3000.00|4.2|150\r\n2|Care Clinic|Delhi|5|800.50|3.8|40\n",
    )
    .unwrap();

    let store: RecordStore<Hospital> = RecordStore::new(&path, FieldLimits::Legacy);
    let loaded = store.load_all().unwrap();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].reviews, 150);
    assert_eq!(loaded[1].name, "Care Clinic");
    assert_eq!(loaded[1].bed_price, 800.5);
}

#[test]
fn test_stores_share_data_dir() {
    let temp_dir = create_temp_data_dir();
    let config = hospitaldb::config::Config {
        data_dir: temp_dir.path().display().to_string(),
        ..Default::default()
    };
    let stores = Stores::from_config(&config);

    stores.hospitals.append(&hospital(1, "General", "Pune")).unwrap();
    stores.patients.append(&Patient::new(1, "Ann", 30, "Flu", 1)).unwrap();

    assert_eq!(stores.hospitals.count().unwrap(), 1);
    assert_eq!(stores.patients.count().unwrap(), 1);
    assert_eq!(stores.users.count().unwrap(), 0);
}
