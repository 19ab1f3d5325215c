//! aapctl CLI Binary
//!
//! Command-line client for the AAP administration service.

use aapctl::cli::{map_error, run, settings_sources, Cli, DefaultDependencies};
use aapctl::config::Settings;
use aapctl::error::CommandError;
use aapctl::logging::{init_logging, LoggingConfig};
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let settings = match Settings::load(&settings_sources(&cli)) {
        Ok(settings) => settings,
        Err(e) => exit_with(CommandError::from(e)),
    };

    // Build logging config from the config file section and CLI args
    let logging_section = match settings.logging() {
        Ok(section) => section,
        Err(e) => exit_with(CommandError::from(e)),
    };
    let logging_config = build_logging_config(&cli, logging_section);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("aapctl starting");

    match run(&cli.command, &DefaultDependencies, &settings) {
        Ok(()) => info!("Command completed successfully"),
        Err(e) => exit_with(e),
    }
}

/// Print the error unless it was already reported, then exit with failure.
fn exit_with(e: CommandError) -> ! {
    error!(error = %e, silent = e.is_silent(), "Command failed");
    if let Some(message) = map_error(&e) {
        eprintln!("{}", message);
    }
    process::exit(1);
}

/// Merge CLI logging flags over the configured logging section.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, mut config: LoggingConfig) -> LoggingConfig {
    if cli.verbose {
        config.enabled = true;
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.enabled = true;
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }
    config
}
