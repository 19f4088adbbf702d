//! CLI configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use rental_batch::PricingConfig;

/// Output path meaning "write the report to stdout"
pub const STDOUT_PATH: &str = "-";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Input document path
    pub input: PathBuf,
    /// Report path, or `-` for stdout
    pub output: PathBuf,
    /// Log level
    pub log_level: String,
    /// Log format
    pub log_format: LogFormat,
    /// Pricing rules
    pub pricing: PricingConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/input.json"),
            output: PathBuf::from("data/output.json"),
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            pricing: PricingConfig::default(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from an optional file and `RENTAL__*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        rental_batch::layered_source(path)?.try_deserialize()
    }

    /// Returns true if the report goes to stdout
    pub fn writes_to_stdout(&self) -> bool {
        self.output == Path::new(STDOUT_PATH)
    }
}
