//! CLI module for hospitaldb
//!
//! Provides command-line interface for:
//! - init: Create the data directory, store files and a config file
//! - shell: Interactive menu (the default)

mod args;
mod commands;
mod errors;
mod render;
mod shell;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, shell};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use render::{hospital_row, hospital_row_in_city, patient_row};
pub use shell::{AuthChoice, MenuChoice, Shell};
