//! Main entry point for the application.
//!
//! This module initializes logging, loads environment variables and configuration,
//! loads the linguistic annotator and runs the task extraction pipeline over the
//! input text.
//!
//! The input can be:
//! - A file, or standard input
//! - Text given inline with `--text`
//! - The built-in demonstration text (`--sample`)

mod cli;
mod config;
mod constants;
mod core;
mod errors;
mod nlp;
mod output;
mod utils;

use crate::core::TaskExtractor;
use clap::Parser;
use config::Config;
use errors::Error;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{error, warn};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments
/// 2. Load the configuration file, if any
/// 3. Initialize logging system
/// 4. Load environment variables
/// 5. Load the annotator and run the extraction pipeline
fn main() {
    let cli = cli::Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let log_level = cli
        .logging_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    utils::init_logging(&log_level, cli.log_file || config.logging.file);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    if let Err(e) = run(&cli, &config) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Loads the configuration named on the command line, or the default one if it exists
fn resolve_config(cli: &cli::Cli) -> Result<Config, Error> {
    match cli.config.clone().or_else(config::default_config_path) {
        Some(path) => config::load_config(&path),
        None => Ok(Config::default()),
    }
}

fn run(cli: &cli::Cli, config: &Config) -> Result<(), Error> {
    let annotator = nlp::load_annotator(&config.annotator)?;
    let text = cli.input_source().read()?;

    let tasks = TaskExtractor::new(annotator.as_ref()).run(&text)?;

    let format = cli.format.unwrap_or(config.output.format);
    let file = cli
        .output
        .clone()
        .or_else(|| config.output.file.as_ref().map(PathBuf::from));
    let color = file.is_none() && std::io::stdout().is_terminal();

    let rendered = output::render(&tasks, format, color)?;
    output::write_output(&rendered, file.as_deref())
}
