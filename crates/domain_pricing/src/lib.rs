//! Pricing Domain - Rental Price and Commission
//!
//! This crate turns a validated rental and its car into a price, and splits
//! the platform commission taken on that price.
//!
//! # Pricing
//!
//! - **Days**: inclusive count of calendar days between start and end date
//! - **Time cost**: days priced through a tiered [`DiscountSchedule`]
//! - **Distance cost**: kilometres driven times the per-km rate
//! - **Price**: time cost + distance cost
//!
//! # Commission
//!
//! 30% of the price by default, of which half goes to insurance, a flat
//! per-day fee goes to roadside assistance and the remainder (never negative)
//! goes to the platform.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{CarId, Money, RentalId, RentalPeriod};
//! use domain_pricing::{Car, CommissionPolicy, RentalPricer, RentalRequest};
//!
//! let car = Car::new(CarId::new(1), Money::from_minor(2000), Money::from_minor(10));
//! let period = RentalPeriod::parse("2017-12-8", "2017-12-10").unwrap();
//! let rental = RentalRequest::new(RentalId::new(1), CarId::new(1), period, 100);
//!
//! let price = RentalPricer::default().price(&rental, &car).unwrap();
//! assert_eq!(price.total, Money::from_minor(6600));
//!
//! let split = CommissionPolicy::default().split(price.total, price.days).unwrap();
//! assert_eq!(split.insurance_fee, Money::from_minor(990));
//! ```

pub mod discount;
pub mod rental;
pub mod commission;
pub mod error;

pub use discount::{discounted_time_cost, DiscountSchedule, DiscountTier};
pub use rental::{distance_cost, Car, RentalPrice, RentalPricer, RentalRequest};
pub use commission::{commission, CommissionBreakdown, CommissionPolicy};
pub use error::PricingError;
