//! Money types with exact integer arithmetic
//!
//! Amounts are always expressed in minor currency units (e.g. cents) and can
//! never be negative. Percentages are held as `rust_decimal` values so that a
//! rate like 12.5% stays exact until the result is floored to whole minor units.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow during calculation")]
    Overflow,

    #[error("Negative amount: cannot subtract {subtrahend} from {minuend}")]
    NegativeAmount {
        minuend: u64,
        subtrahend: u64,
    },

    #[error("Invalid percentage: {0} (must be between 0 and 100)")]
    InvalidPercentage(Decimal),
}

/// A non-negative monetary amount in minor currency units
///
/// All arithmetic is checked; an operation that would overflow or go below
/// zero returns a `MoneyError` instead of wrapping.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// The zero amount
    pub const ZERO: Money = Money(0);

    /// Creates Money from an amount in minor units
    pub const fn from_minor(minor_units: u64) -> Self {
        Self(minor_units)
    }

    /// Returns the amount in minor units
    pub const fn minor_units(&self) -> u64 {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition
    pub fn checked_add(&self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction that refuses to produce a negative amount
    pub fn checked_sub(&self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(MoneyError::NegativeAmount {
                minuend: self.0,
                subtrahend: other.0,
            })
    }

    /// Subtraction floored at zero
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// Multiplies by a whole quantity (days, kilometres, ...)
    pub fn times(&self, quantity: u64) -> Result<Money, MoneyError> {
        self.0
            .checked_mul(quantity)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Sums a sequence of amounts, failing on overflow
    pub fn sum<I>(amounts: I) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, amount| acc.checked_add(amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Money {
    fn from(minor_units: u64) -> Self {
        Money(minor_units)
    }
}

/// A percentage between 0 and 100 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Percentage(Decimal);

impl Percentage {
    /// Creates a percentage from a decimal value (e.g. 12.5 for 12.5%)
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidPercentage` if the value is outside [0, 100]
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(MoneyError::InvalidPercentage(value));
        }
        Ok(Self(value))
    }

    /// Creates a whole-number percentage; values above 100 saturate at 100
    pub fn from_whole(percent: u8) -> Self {
        Self(Decimal::from(percent.min(100)))
    }

    /// 0%
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the percentage value (e.g. 30 for 30%)
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `100 - self`, the share left after applying this percentage
    pub fn complement(&self) -> Self {
        Self(Decimal::ONE_HUNDRED - self.0)
    }

    /// Applies this percentage to an amount, flooring to whole minor units
    ///
    /// The full product is computed exactly before flooring, so
    /// `floor(amount * percent / 100)` never accumulates per-unit rounding.
    pub fn apply_floor(&self, amount: Money) -> Result<Money, MoneyError> {
        Decimal::from(amount.minor_units())
            .checked_mul(self.0)
            .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
            .and_then(|share| share.floor().to_u64())
            .map(Money::from_minor)
            .ok_or(MoneyError::Overflow)
    }
}

impl TryFrom<Decimal> for Percentage {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for Decimal {
    fn from(percentage: Percentage) -> Decimal {
        percentage.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}
