//! Billing Domain - Options and Balanced Settlement
//!
//! This crate turns a priced rental into the set of ledger actions that
//! settle it: who owes how much, and who receives how much.
//!
//! # Settlement Principles
//!
//! Every rental settles through exactly five actions:
//! - The driver is debited the rental price plus all option costs
//! - The owner is credited the rental price minus the commission, plus
//!   the options that benefit the owner
//! - Insurance and assistance are credited their commission fees
//! - The platform is credited its commission fee plus the options that
//!   benefit the platform
//!
//! The sum of all debits must equal the sum of all credits.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{Money, OptionId, RentalId};
//! use domain_billing::{ActionGenerator, OptionCatalog, OptionRequest, OptionsLedger};
//! use domain_pricing::CommissionPolicy;
//!
//! let catalog = OptionCatalog::default();
//! let requests = vec![OptionRequest::new(OptionId::new(1), RentalId::new(1), "gps")];
//! let ledger = OptionsLedger::new(&catalog, &requests);
//!
//! let price = Money::from_minor(7000);
//! let commission = CommissionPolicy::default().split(price, 3).unwrap();
//! let options = ledger.for_rental(RentalId::new(1), 3).unwrap();
//!
//! let actions = ActionGenerator::new().generate_for(price, &commission, &options).unwrap();
//! assert_eq!(actions[0].amount, Money::from_minor(8500));
//! ```

pub mod catalog;
pub mod options;
pub mod actions;
pub mod settlement;
pub mod error;

pub use catalog::{Beneficiary, OptionCatalog, OptionDefinition};
pub use options::{OptionRequest, OptionsLedger, PricedOption, RentalOptions};
pub use actions::{ensure_balanced, total_credits, total_debits, Direction, LedgerAction, Party};
pub use settlement::ActionGenerator;
pub use error::BillingError;
