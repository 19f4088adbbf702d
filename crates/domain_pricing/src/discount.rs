//! Tiered time-cost discounting
//!
//! A discount schedule splits the days of a rental into consecutive bands.
//! Every band charges its days at the daily rate reduced by the band's
//! discount, so a long rental pays full price for its first day and
//! progressively less for the following ones.

use serde::{Deserialize, Serialize};

use core_kernel::{Money, MoneyError, Percentage};
use crate::error::PricingError;

/// One band of a discount schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTier {
    /// Last rental day (1-based, cumulative) covered by this band.
    /// `None` covers every remaining day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_to_day: Option<u32>,
    /// Discount applied to the daily rate within this band
    pub discount: Percentage,
}

impl DiscountTier {
    /// A band ending at `up_to_day`
    pub fn until(up_to_day: u32, discount: Percentage) -> Self {
        Self {
            up_to_day: Some(up_to_day),
            discount,
        }
    }

    /// The final, unbounded band
    pub fn remaining(discount: Percentage) -> Self {
        Self {
            up_to_day: None,
            discount,
        }
    }
}

/// An ordered discount schedule covering every day from day 1 onwards
///
/// # Invariants
///
/// - At least one tier
/// - Bounded tiers have strictly increasing `up_to_day` values, all >= 1
/// - Exactly one unbounded tier, and it comes last
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DiscountTier>", into = "Vec<DiscountTier>")]
pub struct DiscountSchedule {
    tiers: Vec<DiscountTier>,
}

impl DiscountSchedule {
    /// Builds a schedule, checking that it covers every day without gaps
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidSchedule` when the tiers are empty,
    /// out of order, or not terminated by a single unbounded tier.
    pub fn new(tiers: Vec<DiscountTier>) -> Result<Self, PricingError> {
        let (last, bounded) = tiers
            .split_last()
            .ok_or_else(|| PricingError::InvalidSchedule("no tiers".to_string()))?;

        if last.up_to_day.is_some() {
            return Err(PricingError::InvalidSchedule(
                "last tier must cover all remaining days".to_string(),
            ));
        }

        let mut previous = 0u32;
        for (index, tier) in bounded.iter().enumerate() {
            let up_to_day = tier.up_to_day.ok_or_else(|| {
                PricingError::InvalidSchedule(format!(
                    "tier {} is unbounded but is not the last tier",
                    index
                ))
            })?;

            if up_to_day <= previous {
                return Err(PricingError::InvalidSchedule(format!(
                    "tier {} ends at day {} which does not follow day {}",
                    index, up_to_day, previous
                )));
            }
            previous = up_to_day;
        }

        Ok(Self { tiers })
    }

    /// Returns the tiers in ascending order
    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    /// Prices `total_days` at `price_per_day` under this schedule
    pub fn time_cost(&self, total_days: u32, price_per_day: Money) -> Result<Money, MoneyError> {
        discounted_time_cost(total_days, price_per_day, self)
    }
}

impl Default for DiscountSchedule {
    /// Day 1 at full price, days 2-4 at 10% off, days 5-10 at 30% off,
    /// day 11 onwards at 50% off
    fn default() -> Self {
        Self {
            tiers: vec![
                DiscountTier::until(1, Percentage::zero()),
                DiscountTier::until(4, Percentage::from_whole(10)),
                DiscountTier::until(10, Percentage::from_whole(30)),
                DiscountTier::remaining(Percentage::from_whole(50)),
            ],
        }
    }
}

impl TryFrom<Vec<DiscountTier>> for DiscountSchedule {
    type Error = PricingError;

    fn try_from(tiers: Vec<DiscountTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<DiscountSchedule> for Vec<DiscountTier> {
    fn from(schedule: DiscountSchedule) -> Self {
        schedule.tiers
    }
}

/// Computes the discounted time cost of a rental
///
/// Walks the tiers in order, charging each tier's share of the days at the
/// discounted rate. The discount is applied to the whole tier product
/// (`days * price_per_day`) before flooring, not to the daily rate.
///
/// # Arguments
///
/// * `total_days` - Number of rental days
/// * `price_per_day` - Undiscounted daily rate
/// * `schedule` - Discount schedule to apply
///
/// # Example
///
/// ```
/// use core_kernel::Money;
/// use domain_pricing::{discounted_time_cost, DiscountSchedule};
///
/// let cost = discounted_time_cost(5, Money::from_minor(2000), &DiscountSchedule::default()).unwrap();
/// assert_eq!(cost, Money::from_minor(8800));
/// ```
pub fn discounted_time_cost(
    total_days: u32,
    price_per_day: Money,
    schedule: &DiscountSchedule,
) -> Result<Money, MoneyError> {
    let mut cost = Money::ZERO;
    let mut covered_days = 0u32;

    for tier in &schedule.tiers {
        let remaining = total_days.saturating_sub(covered_days);
        let days_in_tier = match tier.up_to_day {
            Some(up_to_day) => remaining.min(up_to_day.saturating_sub(covered_days)),
            None => remaining,
        };
        if days_in_tier == 0 {
            break;
        }

        let undiscounted = price_per_day.times(u64::from(days_in_tier))?;
        let charged = tier.discount.complement().apply_floor(undiscounted)?;
        cost = cost.checked_add(charged)?;
        covered_days += days_in_tier;
    }

    Ok(cost)
}
