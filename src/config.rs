//! Configuration file for hospitaldb
//!
//! ```json
//! {
//!   "data_dir": "./data",
//!   "hospital_file": "hospitals.txt",
//!   "patient_file": "patients.txt",
//!   "user_file": "users.txt",
//!   "field_limits": "legacy",
//!   "log_level": "warn"
//! }
//! ```
//!
//! Every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::{CliError, CliResult};
use crate::observability::Severity;
use crate::record::FieldLimits;

/// Default config path used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./hospitaldb.json";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the three store files
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_hospital_file")]
    pub hospital_file: String,

    #[serde(default = "default_patient_file")]
    pub patient_file: String,

    #[serde(default = "default_user_file")]
    pub user_file: String,

    /// String length policy on append (default "legacy")
    #[serde(default)]
    pub field_limits: FieldLimits,

    /// Lowest severity written to stderr (default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_hospital_file() -> String {
    "hospitals.txt".to_string()
}
fn default_patient_file() -> String {
    "patients.txt".to_string()
}
fn default_user_file() -> String {
    "users.txt".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            hospital_file: default_hospital_file(),
            patient_file: default_patient_file(),
            user_file: default_user_file(),
            field_limits: FieldLimits::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Resolve the configuration to use.
    ///
    /// An explicit path must exist. Without one, `./hospitaldb.json` is used
    /// if present and defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> CliResult<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_dir.is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }

        for (key, name) in [
            ("hospital_file", &self.hospital_file),
            ("patient_file", &self.patient_file),
            ("user_file", &self.user_file),
        ] {
            if name.is_empty() {
                return Err(CliError::config_error(format!("{} must not be empty", key)));
            }
            if name.contains(['/', '\\']) || name == "." || name == ".." {
                return Err(CliError::config_error(format!(
                    "{} must be a bare file name, got '{}'",
                    key, name
                )));
            }
        }

        let mut names = vec![&self.hospital_file, &self.patient_file, &self.user_file];
        names.sort();
        names.dedup();
        if names.len() != 3 {
            return Err(CliError::config_error(
                "hospital_file, patient_file and user_file must be distinct",
            ));
        }

        self.severity()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(CliError::config_error)
    }

    /// Get data directory as Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }

    pub fn hospital_path(&self) -> PathBuf {
        self.data_path().join(&self.hospital_file)
    }

    pub fn patient_path(&self) -> PathBuf {
        self.data_path().join(&self.patient_file)
    }

    pub fn user_path(&self) -> PathBuf {
        self.data_path().join(&self.user_file)
    }
}
