//! Ledger action types
//!
//! A rental settles through a set of debit and credit actions. The driver
//! is debited and every other party is credited; the set must always
//! balance.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Money;
use crate::error::BillingError;

/// Direction of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Money owed by the party
    Debit,
    /// Money received by the party
    Credit,
}

/// Party of a rental settlement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    /// The driver renting the car
    Driver,
    /// The car owner
    Owner,
    /// The insurer
    Insurance,
    /// The roadside assistance provider
    Assistance,
    /// The rental platform
    Platform,
}

impl Party {
    /// Name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Party::Driver => "driver",
            Party::Owner => "owner",
            Party::Insurance => "insurance",
            Party::Assistance => "assistance",
            Party::Platform => "platform",
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One debit or credit entry of a settlement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerAction {
    /// Party owing or receiving the amount
    pub who: Party,
    /// Debit or credit
    #[serde(rename = "type")]
    pub direction: Direction,
    /// Amount (never negative)
    pub amount: Money,
}

impl LedgerAction {
    /// Creates a debit action
    pub fn debit(who: Party, amount: Money) -> Self {
        Self {
            who,
            direction: Direction::Debit,
            amount,
        }
    }

    /// Creates a credit action
    pub fn credit(who: Party, amount: Money) -> Self {
        Self {
            who,
            direction: Direction::Credit,
            amount,
        }
    }
}

fn total_in(actions: &[LedgerAction], direction: Direction) -> Result<Money, BillingError> {
    Ok(Money::sum(
        actions
            .iter()
            .filter(|a| a.direction == direction)
            .map(|a| a.amount),
    )?)
}

/// Sum of all debit amounts
pub fn total_debits(actions: &[LedgerAction]) -> Result<Money, BillingError> {
    total_in(actions, Direction::Debit)
}

/// Sum of all credit amounts
pub fn total_credits(actions: &[LedgerAction]) -> Result<Money, BillingError> {
    total_in(actions, Direction::Credit)
}

/// Checks that debits equal credits
///
/// # Errors
///
/// Returns `BillingError::UnbalancedSettlement` carrying both totals.
pub fn ensure_balanced(actions: &[LedgerAction]) -> Result<(), BillingError> {
    let debits = total_debits(actions)?;
    let credits = total_credits(actions)?;

    if debits != credits {
        return Err(BillingError::UnbalancedSettlement {
            debits,
            credits,
            rental_id: None,
        });
    }

    Ok(())
}
