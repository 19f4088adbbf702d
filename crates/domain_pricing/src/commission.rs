//! Platform commission and its split
//!
//! The platform keeps a share of every rental price. That commission pays
//! the insurer and the roadside assistance provider first; whatever is left
//! is the platform fee.

use serde::{Deserialize, Serialize};
use tracing::warn;

use core_kernel::{Money, MoneyError, Percentage};

/// Commission rates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommissionPolicy {
    /// Share of the rental price taken as commission
    pub rate: Percentage,
    /// Share of the commission paid to the insurer
    pub insurance_share: Percentage,
    /// Flat assistance fee charged per rental day
    pub assistance_fee_per_day: Money,
}

impl Default for CommissionPolicy {
    fn default() -> Self {
        Self {
            rate: Percentage::from_whole(30),
            insurance_share: Percentage::from_whole(50),
            assistance_fee_per_day: Money::from_minor(100),
        }
    }
}

/// The commission of one rental split between its recipients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionBreakdown {
    /// Paid to the insurer
    pub insurance_fee: Money,
    /// Paid to the assistance provider
    pub assistance_fee: Money,
    /// Kept by the platform; zero when the other two fees use up the commission
    pub platform_fee: Money,
}

impl CommissionBreakdown {
    /// Sum of the three fees
    pub fn total(&self) -> Result<Money, MoneyError> {
        Money::sum([self.insurance_fee, self.assistance_fee, self.platform_fee])
    }
}

impl CommissionPolicy {
    /// Splits the commission on `price` for a rental of `days` days
    ///
    /// Insurance and assistance fees are fixed obligations and are never
    /// reduced. Only the platform fee absorbs a shortfall, and it never goes
    /// below zero, so the three fees may add up to more than the commission.
    ///
    /// # Example
    ///
    /// ```
    /// use core_kernel::Money;
    /// use domain_pricing::CommissionPolicy;
    ///
    /// let split = CommissionPolicy::default().split(Money::from_minor(7000), 3).unwrap();
    /// assert_eq!(split.insurance_fee, Money::from_minor(1050));
    /// assert_eq!(split.assistance_fee, Money::from_minor(300));
    /// assert_eq!(split.platform_fee, Money::from_minor(750));
    /// ```
    pub fn split(&self, price: Money, days: u32) -> Result<CommissionBreakdown, MoneyError> {
        let commission = self.rate.apply_floor(price)?;
        let insurance_fee = self.insurance_share.apply_floor(commission)?;
        let assistance_fee = self.assistance_fee_per_day.times(u64::from(days))?;

        let obligations = insurance_fee.checked_add(assistance_fee)?;
        if obligations > commission {
            warn!(
                %price,
                days,
                %commission,
                %obligations,
                "Insurance and assistance fees exceed the commission; platform fee floored at zero"
            );
        }
        let platform_fee = commission.saturating_sub(obligations);

        Ok(CommissionBreakdown {
            insurance_fee,
            assistance_fee,
            platform_fee,
        })
    }
}

/// Splits the commission on `price` using the default production rates
pub fn commission(price: Money, days: u32) -> Result<CommissionBreakdown, MoneyError> {
    CommissionPolicy::default().split(price, days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(price: u64, days: u32) -> CommissionBreakdown {
        CommissionPolicy::default()
            .split(Money::from_minor(price), days)
            .unwrap()
    }

    #[test]
    fn test_split_reference_rental() {
        let breakdown = split(7000, 3);
        assert_eq!(breakdown.insurance_fee, Money::from_minor(1050));
        assert_eq!(breakdown.assistance_fee, Money::from_minor(300));
        assert_eq!(breakdown.platform_fee, Money::from_minor(750));
        assert_eq!(breakdown.total().unwrap(), Money::from_minor(2100));
    }

    #[test]
    fn test_split_with_rounding() {
        // commission floor(6600 * 0.3) = 1980, insurance 990
        let breakdown = split(6600, 3);
        assert_eq!(breakdown.insurance_fee, Money::from_minor(990));
        assert_eq!(breakdown.platform_fee, Money::from_minor(690));
    }

    #[test]
    fn test_platform_fee_floored_at_zero() {
        // commission 300, insurance 150, assistance 1000
        let breakdown = split(1000, 10);
        assert_eq!(breakdown.insurance_fee, Money::from_minor(150));
        assert_eq!(breakdown.assistance_fee, Money::from_minor(1000));
        assert_eq!(breakdown.platform_fee, Money::ZERO);
    }

    #[test]
    fn test_platform_fee_zero_at_exact_boundary() {
        // commission 600, insurance 300, assistance 300
        let breakdown = split(2000, 3);
        assert_eq!(breakdown.platform_fee, Money::ZERO);
        assert_eq!(breakdown.total().unwrap(), Money::from_minor(600));
    }

    #[test]
    fn test_custom_policy() {
        let policy = CommissionPolicy {
            rate: Percentage::from_whole(20),
            insurance_share: Percentage::from_whole(25),
            assistance_fee_per_day: Money::from_minor(50),
        };
        let breakdown = policy.split(Money::from_minor(10000), 2).unwrap();
        assert_eq!(breakdown.insurance_fee, Money::from_minor(500));
        assert_eq!(breakdown.assistance_fee, Money::from_minor(100));
        assert_eq!(breakdown.platform_fee, Money::from_minor(1400));
    }

    #[test]
    fn test_policy_partial_deserialization() {
        let policy: CommissionPolicy = serde_json::from_str(r#"{"rate": 25}"#).unwrap();
        assert_eq!(policy.rate, Percentage::from_whole(25));
        assert_eq!(policy.assistance_fee_per_day, Money::from_minor(100));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fees_fill_commission_unless_floored(
            price in 0u64..10_000_000u64,
            days in 1u32..60u32
        ) {
            let policy = CommissionPolicy::default();
            let breakdown = policy.split(Money::from_minor(price), days).unwrap();
            let commission = price * 30 / 100;
            let obligations = breakdown.insurance_fee.minor_units() + breakdown.assistance_fee.minor_units();

            if obligations >= commission {
                prop_assert_eq!(breakdown.platform_fee, Money::ZERO);
            } else {
                prop_assert_eq!(breakdown.total().unwrap().minor_units(), commission);
            }
        }
    }
}
