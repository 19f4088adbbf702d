//! Pricing configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use domain_billing::OptionCatalog;
use domain_pricing::{CommissionPolicy, DiscountSchedule, RentalPricer};

use crate::error::BatchError;

/// Prefix of environment variables read into the configuration
pub const ENV_PREFIX: &str = "RENTAL";

/// Separator between nested keys in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Discount schedule, commission rates and option catalog used to price a batch
///
/// Every section defaults to the production values, so a configuration
/// source only needs to name what it overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Discount tiers applied to the time cost
    pub discount_tiers: DiscountSchedule,
    /// Commission rate and its split
    pub commission: CommissionPolicy,
    /// Optional extras available to rentals
    pub options: OptionCatalog,
}

impl PricingConfig {
    /// Loads the `pricing` section from an optional file and the environment
    ///
    /// Environment variables override the file, e.g.
    /// `RENTAL__PRICING__COMMISSION__RATE=25`.
    pub fn load(path: Option<&Path>) -> Result<Self, BatchError> {
        match layered_source(path)?.get::<PricingConfig>("pricing") {
            Ok(config) => Ok(config),
            Err(config::ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Builds a pricer using the configured discount tiers
    pub fn pricer(&self) -> RentalPricer {
        RentalPricer::new(self.discount_tiers.clone())
    }
}

/// Layers an optional configuration file under `RENTAL__*` environment variables
///
/// The file format is inferred from its extension (TOML, JSON or YAML).
pub fn layered_source(path: Option<&Path>) -> Result<config::Config, config::ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path).required(true));
    }

    builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()
}
