//! CLI argument definitions using clap
//!
//! Commands:
//! - hospitaldb [--config <path>] shell
//! - hospitaldb [--config <path>] init

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hospitaldb - hospital, patient and account records in plain text files
#[derive(Parser, Debug)]
#[command(name = "hospitaldb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (default: ./hospitaldb.json if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create the data directory, empty store files and a default config
    Init,

    /// Start the interactive menu (the default)
    Shell,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The requested command, defaulting to the shell
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Shell)
    }
}
