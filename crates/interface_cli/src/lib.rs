//! Command Line Interface
//!
//! Reads a rental batch document, settles it and writes the report.
//!
//! # Configuration
//!
//! Settings are layered, later sources winning:
//!
//! 1. Built-in defaults
//! 2. The file given with `--config` (TOML, JSON or YAML)
//! 3. `RENTAL__*` environment variables, e.g. `RENTAL__LOG_LEVEL=debug`
//! 4. Command line flags

pub mod config;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use rental_batch::RentalBatchProcessor;

pub use crate::config::{CliConfig, LogFormat, STDOUT_PATH};

/// Command line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "rental-pricing", version)]
#[command(about = "Prices a batch of car rentals and writes the balanced settlement actions")]
pub struct Args {
    #[arg(short, long, help = "Input document (default: data/input.json)")]
    pub input: Option<PathBuf>,

    #[arg(short, long, help = "Report path, or - for stdout (default: data/output.json)")]
    pub output: Option<PathBuf>,

    #[arg(short, long, env = "RENTAL_CONFIG", help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Log level: trace, debug, info, warn, error")]
    pub log_level: Option<String>,

    #[arg(long, value_enum, help = "Log format")]
    pub log_format: Option<LogFormat>,
}

impl Args {
    /// Loads the configuration and applies the command line overrides
    pub fn resolve(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load(self.config.as_deref()).with_context(|| {
            match &self.config {
                Some(path) => format!("Failed to load configuration from {}", path.display()),
                None => "Failed to load configuration".to_string(),
            }
        })?;

        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }

        Ok(config)
    }
}

/// Reads, settles and writes one batch
///
/// The report is only written once the whole batch has been settled, so a
/// failed run leaves no output behind.
///
/// # Returns
///
/// The number of rentals in the report
pub fn run(config: &CliConfig) -> Result<usize> {
    if !config.input.exists() {
        bail!("Input file not found: {}", config.input.display());
    }

    let text = fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read {}", config.input.display()))?;

    info!(input = %config.input.display(), "Loaded input document");

    let processor = RentalBatchProcessor::new(config.pricing.clone());
    let report = processor.process_json(&text)?;
    let rendered = report.to_json_pretty()?;

    if config.writes_to_stdout() {
        io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .context("Failed to write report to stdout")?;
    } else {
        fs::write(&config.output, rendered)
            .with_context(|| format!("Failed to write {}", config.output.display()))?;
    }

    info!(
        output = %config.output.display(),
        rentals = report.rentals.len(),
        "Report written"
    );

    Ok(report.rentals.len())
}
