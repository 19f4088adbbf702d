//! Rental Batch - Validated Input to Settlement Report
//!
//! This crate ties the pricing and billing domains together for a whole
//! batch of cars, rentals and option requests:
//!
//! - **Input**: a JSON document validated into typed records
//! - **Configuration**: discount tiers, commission rates and option catalog
//! - **Processing**: per-rental price, commission split and ledger actions
//! - **Report**: one entry per rental with its option codes and actions
//!
//! # Example
//!
//! ```rust
//! use rental_batch::RentalBatchProcessor;
//!
//! let input = r#"{
//!     "cars": [{"id": 1, "price_per_day": 2000, "price_per_km": 10}],
//!     "rentals": [{"id": 1, "car_id": 1, "start_date": "2015-12-8",
//!                  "end_date": "2015-12-8", "distance": 100}]
//! }"#;
//!
//! let report = RentalBatchProcessor::default().process_json(input).unwrap();
//! assert_eq!(report.rentals[0].actions[0].amount.minor_units(), 3000);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod processor;
pub mod report;
pub mod validation;

pub use config::{layered_source, PricingConfig, ENV_PREFIX, ENV_SEPARATOR};
pub use error::{BatchError, Entity, ValidationError};
pub use input::BatchInput;
pub use processor::RentalBatchProcessor;
pub use report::{BatchReport, RentalReport};
pub use validation::InputValidator;
