//! CLI command implementations
//!
//! Both commands load configuration first and apply its log level before
//! anything else is logged.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::storage::Stores;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::shell::Shell;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command(), cli.config.as_deref())
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command, config_path: Option<&Path>) -> CliResult<()> {
    match cmd {
        Command::Init => init(config_path),
        Command::Shell => shell(config_path),
    }
}

/// Initialize a data directory
///
/// Creates the data directory and the three store files if missing, then
/// writes the configuration file if it does not exist yet. A new
/// configuration places the data directory beside the file. Existing records
/// and an existing configuration are left untouched, so running it twice is
/// harmless.
pub fn init(config_path: Option<&Path>) -> CliResult<()> {
    let target = config_path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));
    let config_exists = target.exists();

    let config = if config_exists {
        Config::load(target)?
    } else {
        config_beside(target)
    };
    apply_log_level(&config, target)?;

    let stores = Stores::from_config(&config);
    stores
        .init()
        .map_err(|e| CliError::init_failed(e.to_string()))?;

    if !config_exists {
        let mut content = serde_json::to_string_pretty(&config)?;
        content.push('\n');
        fs::write(target, content).map_err(|e| {
            CliError::init_failed(format!(
                "Failed to write config {}: {}",
                target.display(),
                e
            ))
        })?;
    }

    let data_dir = config.data_path().display().to_string();
    log_event_with_fields(Event::DataDirInitialized, &[("data_dir", data_dir.as_str())]);

    println!("Initialized data directory {}", data_dir);
    Ok(())
}

/// Run the interactive menu on stdin/stdout
pub fn shell(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::resolve(config_path)?;
    apply_log_level(&config, config_path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH)))?;

    let stores = Stores::from_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(&stores, stdin.lock(), stdout.lock());
    shell.run()
}

fn config_beside(target: &Path) -> Config {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Config {
            data_dir: parent.display().to_string(),
            ..Config::default()
        },
        _ => Config::default(),
    }
}

fn apply_log_level(config: &Config, source: &Path) -> CliResult<()> {
    Logger::set_min_severity(config.severity()?);

    let source = source.display().to_string();
    let data_dir = config.data_path().display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("data_dir", data_dir.as_str()), ("source", source.as_str())],
    );
    Ok(())
}
