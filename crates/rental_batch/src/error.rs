//! Batch errors

use std::fmt;

use core_kernel::{CarId, RentalId, TemporalError};
use domain_billing::BillingError;
use domain_pricing::PricingError;
use thiserror::Error;

/// Kind of input record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Car,
    Rental,
    Option,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Car => write!(f, "Car"),
            Entity::Rental => write!(f, "Rental"),
            Entity::Option => write!(f, "Option"),
        }
    }
}

/// Errors found while validating an input document
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid data structure: {0}")]
    InvalidStructure(String),

    #[error("{entity} at index {index} missing required field: {field}")]
    MissingField {
        entity: Entity,
        index: usize,
        field: &'static str,
    },

    #[error("{entity} at index {index} has invalid {field}: must be {expected}, got {value}")]
    InvalidField {
        entity: Entity,
        index: usize,
        field: &'static str,
        expected: String,
        value: serde_json::Value,
    },

    #[error("Rental at index {index} has invalid date format: {source}")]
    InvalidDateFormat {
        index: usize,
        #[source]
        source: TemporalError,
    },

    #[error("Rental at index {index} has invalid dates: end_date cannot be before start_date")]
    InvalidDates { index: usize },

    #[error("{entity} at index {index} references non-existent {field}: {id}")]
    DanglingReference {
        entity: Entity,
        index: usize,
        field: &'static str,
        id: u64,
    },
}

/// Errors raised while reading, validating, or settling a batch
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Invalid JSON format: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Billing(#[from] BillingError),

    #[error("Rental {rental_id} references car {car_id}, which is not in the batch")]
    MissingCar { rental_id: RentalId, car_id: CarId },

    #[error("Failed to serialize report: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
