//! Catalog of optional extras
//!
//! Each option code has a daily rate and a beneficiary: the party credited
//! with what the driver pays for that extra.

use serde::{Deserialize, Serialize};

use core_kernel::Money;
use crate::error::BillingError;

/// Party credited with an option's cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Beneficiary {
    /// The car owner
    Owner,
    /// The rental platform
    Platform,
}

/// Definition of one optional extra
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDefinition {
    /// Option code, e.g. `gps`
    pub code: String,
    /// Daily rate, always positive
    pub price_per_day: Money,
    /// Party credited with the option's cost
    pub beneficiary: Beneficiary,
}

impl OptionDefinition {
    /// Creates a new option definition
    pub fn new(code: impl Into<String>, price_per_day: Money, beneficiary: Beneficiary) -> Self {
        Self {
            code: code.into(),
            price_per_day,
            beneficiary,
        }
    }
}

/// Fixed registry of option definitions, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<OptionDefinition>", into = "Vec<OptionDefinition>")]
pub struct OptionCatalog {
    definitions: Vec<OptionDefinition>,
}

impl OptionCatalog {
    /// Builds a catalog
    ///
    /// # Errors
    ///
    /// Returns `BillingError::InvalidCatalog` if a code is empty or repeated,
    /// or if a daily rate is zero.
    pub fn new(definitions: Vec<OptionDefinition>) -> Result<Self, BillingError> {
        for (index, definition) in definitions.iter().enumerate() {
            if definition.code.trim().is_empty() {
                return Err(BillingError::InvalidCatalog(format!(
                    "option at index {} has an empty code",
                    index
                )));
            }
            if definition.price_per_day.is_zero() {
                return Err(BillingError::InvalidCatalog(format!(
                    "option '{}' must have a positive price_per_day",
                    definition.code
                )));
            }
            if definitions[..index].iter().any(|d| d.code == definition.code) {
                return Err(BillingError::InvalidCatalog(format!(
                    "option '{}' is defined more than once",
                    definition.code
                )));
            }
        }

        Ok(Self { definitions })
    }

    /// Looks up an option definition by code
    pub fn get(&self, code: &str) -> Option<&OptionDefinition> {
        self.definitions.iter().find(|d| d.code == code)
    }

    /// Looks up an option definition, failing for unknown codes
    pub fn definition(&self, code: &str) -> Result<&OptionDefinition, BillingError> {
        self.get(code).ok_or_else(|| BillingError::UnknownOptionType {
            code: code.to_string(),
            valid_codes: self.valid_codes(),
            rental_id: None,
        })
    }

    /// Returns true if the code is in the catalog
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// All option codes in declaration order
    pub fn valid_codes(&self) -> Vec<String> {
        self.definitions.iter().map(|d| d.code.clone()).collect()
    }

    /// All definitions in declaration order
    pub fn definitions(&self) -> &[OptionDefinition] {
        &self.definitions
    }

    /// Cost of an option over `days` rental days
    ///
    /// # Errors
    ///
    /// Returns `BillingError::UnknownOptionType` carrying the offending code
    /// and the list of valid codes.
    pub fn price_for(&self, code: &str, days: u32) -> Result<Money, BillingError> {
        let definition = self.definition(code)?;
        Ok(definition.price_per_day.times(u64::from(days))?)
    }
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self {
            definitions: vec![
                OptionDefinition::new("gps", Money::from_minor(500), Beneficiary::Owner),
                OptionDefinition::new("baby_seat", Money::from_minor(200), Beneficiary::Owner),
                OptionDefinition::new(
                    "additional_insurance",
                    Money::from_minor(1000),
                    Beneficiary::Platform,
                ),
            ],
        }
    }
}

impl TryFrom<Vec<OptionDefinition>> for OptionCatalog {
    type Error = BillingError;

    fn try_from(definitions: Vec<OptionDefinition>) -> Result<Self, Self::Error> {
        Self::new(definitions)
    }
}

impl From<OptionCatalog> for Vec<OptionDefinition> {
    fn from(catalog: OptionCatalog) -> Self {
        catalog.definitions
    }
}
