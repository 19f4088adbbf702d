//! Pricing domain errors

use thiserror::Error;

use core_kernel::{CarId, MoneyError, RentalId};

/// Errors that can occur while pricing a rental
#[derive(Debug, Error)]
pub enum PricingError {
    /// Discount schedule does not cover every rental day exactly once
    #[error("Invalid discount schedule: {0}")]
    InvalidSchedule(String),

    /// Rental was priced against a car it does not reference
    #[error("Rental {rental_id} references car {expected}, but car {actual} was supplied")]
    CarMismatch {
        rental_id: RentalId,
        expected: CarId,
        actual: CarId,
    },

    /// Monetary calculation failed
    #[error(transparent)]
    Money(#[from] MoneyError),
}
