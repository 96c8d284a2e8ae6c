//! The three stores of one data directory

use std::fs::{self, OpenOptions};
use std::path::Path;

use super::errors::{StoreError, StoreResult};
use super::store::RecordStore;
use crate::config::Config;
use crate::record::{Hospital, Patient, User};

/// Hospital, patient and user stores opened from one configuration.
#[derive(Debug, Clone)]
pub struct Stores {
    pub hospitals: RecordStore<Hospital>,
    pub patients: RecordStore<Patient>,
    pub users: RecordStore<User>,
}

impl Stores {
    /// Builds store handles from configuration. No file is touched.
    pub fn from_config(config: &Config) -> Self {
        Self {
            hospitals: RecordStore::new(config.hospital_path(), config.field_limits),
            patients: RecordStore::new(config.patient_path(), config.field_limits),
            users: RecordStore::new(config.user_path(), config.field_limits),
        }
    }

    /// Creates the data directory and any missing store file as empty.
    ///
    /// Existing files are left as they are.
    pub fn init(&self) -> StoreResult<()> {
        for path in [
            self.hospitals.path(),
            self.patients.path(),
            self.users.path(),
        ] {
            touch(path)?;
        }
        Ok(())
    }
}

fn touch(path: &Path) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::file_unavailable(
                    path,
                    format!("Failed to create directory: {}", parent.display()),
                    e,
                )
            })?;
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| StoreError::file_unavailable(path, "Failed to create store file", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().join("data").display().to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_from_config_paths() {
        let temp_dir = TempDir::new().unwrap();
        let stores = Stores::from_config(&config_for(&temp_dir));

        let data = temp_dir.path().join("data");
        assert_eq!(stores.hospitals.path(), data.join("hospitals.txt"));
        assert_eq!(stores.patients.path(), data.join("patients.txt"));
        assert_eq!(stores.users.path(), data.join("users.txt"));
        assert!(!data.exists());
    }

    #[test]
    fn test_init_creates_empty_files() {
        let temp_dir = TempDir::new().unwrap();
        let stores = Stores::from_config(&config_for(&temp_dir));

        stores.init().unwrap();

        assert!(stores.hospitals.path().exists());
        assert_eq!(stores.patients.count().unwrap(), 0);
        assert_eq!(stores.users.count().unwrap(), 0);
    }

    #[test]
    fn test_init_keeps_existing_records() {
        let temp_dir = TempDir::new().unwrap();
        let stores = Stores::from_config(&config_for(&temp_dir));

        stores.users.append(&User::new("alice", "pw1")).unwrap();
        stores.init().unwrap();
        stores.init().unwrap();

        assert_eq!(stores.users.count().unwrap(), 1);
    }
}
