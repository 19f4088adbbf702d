//! Rental Pricing - Batch Settlement Binary
//!
//! This binary settles a batch of car rentals and writes the report.
//!
//! # Usage
//!
//! ```bash
//! # Read data/input.json, write data/output.json
//! cargo run --bin rental-pricing
//!
//! # Explicit paths, report on stdout
//! cargo run --bin rental-pricing -- --input rentals.json --output -
//!
//! # Override pricing rules from the environment
//! RENTAL__PRICING__COMMISSION__RATE=25 cargo run --bin rental-pricing
//! ```
//!
//! # Environment Variables
//!
//! * `RENTAL_CONFIG` - Configuration file path
//! * `RENTAL__INPUT` - Input document path (default: data/input.json)
//! * `RENTAL__OUTPUT` - Report path (default: data/output.json)
//! * `RENTAL__LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `RENTAL__LOG_FORMAT` - Log format: text or json (default: text)
//! * `RUST_LOG` - Overrides the log level with a full filter directive

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_cli::{Args, LogFormat};

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = match args.resolve() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_level, config.log_format);

    match interface_cli::run(&config) {
        Ok(_) => {
            if !config.writes_to_stdout() {
                println!("Successfully generated {}", config.output.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %format!("{:#}", err), "Batch failed");
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so that stdout can carry the report.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
/// * `format` - Human-readable or JSON lines
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
