//! Generation of the balanced action set of a rental
//!
//! The driver pays the rental price plus all options. The commission fees go
//! to insurance, assistance and the platform, option costs go to their
//! beneficiaries, and the owner receives what is left of the rental price.

use std::collections::BTreeMap;
use tracing::debug;

use core_kernel::Money;
use domain_pricing::CommissionBreakdown;
use crate::actions::{ensure_balanced, LedgerAction, Party};
use crate::catalog::Beneficiary;
use crate::error::BillingError;
use crate::options::RentalOptions;

/// Builds the five settlement actions of a rental
///
/// The generated set always contains, in order: driver debit, owner credit,
/// insurance credit, assistance credit and platform credit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionGenerator;

impl ActionGenerator {
    /// Creates a new generator
    pub fn new() -> Self {
        Self
    }

    /// Generates the actions of a rental
    ///
    /// # Arguments
    ///
    /// * `price` - Rental price (time + distance)
    /// * `commission` - Commission split of `price`
    /// * `options_total` - Total cost of the rental's options
    /// * `by_beneficiary` - Option costs per beneficiary
    ///
    /// # Errors
    ///
    /// Returns `BillingError::UnbalancedSettlement` if debits and credits
    /// differ. This happens only when insurance and assistance fees together
    /// exceed the rental price, since the owner credit is floored at zero.
    pub fn generate(
        &self,
        price: Money,
        commission: &CommissionBreakdown,
        options_total: Money,
        by_beneficiary: &BTreeMap<Beneficiary, Money>,
    ) -> Result<Vec<LedgerAction>, BillingError> {
        let owner_options = by_beneficiary
            .get(&Beneficiary::Owner)
            .copied()
            .unwrap_or(Money::ZERO);
        let platform_options = by_beneficiary
            .get(&Beneficiary::Platform)
            .copied()
            .unwrap_or(Money::ZERO);

        let driver_amount = price.checked_add(options_total)?;
        let owner_amount = price
            .saturating_sub(commission.total()?)
            .checked_add(owner_options)?;
        let platform_amount = commission.platform_fee.checked_add(platform_options)?;

        let actions = vec![
            LedgerAction::debit(Party::Driver, driver_amount),
            LedgerAction::credit(Party::Owner, owner_amount),
            LedgerAction::credit(Party::Insurance, commission.insurance_fee),
            LedgerAction::credit(Party::Assistance, commission.assistance_fee),
            LedgerAction::credit(Party::Platform, platform_amount),
        ];

        ensure_balanced(&actions)?;

        debug!(
            %driver_amount,
            %owner_amount,
            %platform_amount,
            "Generated settlement actions"
        );

        Ok(actions)
    }

    /// Generates the actions of a rental from its resolved options
    pub fn generate_for(
        &self,
        price: Money,
        commission: &CommissionBreakdown,
        options: &RentalOptions,
    ) -> Result<Vec<LedgerAction>, BillingError> {
        self.generate(
            price,
            commission,
            options.total_price()?,
            &options.amounts_by_beneficiary()?,
        )
        .map_err(|e| e.for_rental(options.rental_id()))
    }
}
