//! Core Kernel - Foundational types for the rental pricing system
//!
//! This crate provides the building blocks shared by every domain crate:
//! - Money in integer minor units with checked arithmetic
//! - Percentages with exact decimal application
//! - Calendar dates and inclusive rental periods
//! - Integer identifiers for cars, rentals and option requests

pub mod money;
pub mod temporal;
pub mod identifiers;

pub use money::{Money, MoneyError, Percentage};
pub use temporal::{parse_calendar_date, rental_days, RentalPeriod, TemporalError};
pub use identifiers::{CarId, OptionId, RentalId};
