//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Days, NaiveDate};
use core_kernel::{CarId, Money, OptionId, Percentage, RentalId, RentalPeriod};
use domain_billing::OptionRequest;
use domain_pricing::{Car, DiscountSchedule, DiscountTier, RentalRequest};
use proptest::prelude::*;
use rental_batch::BatchInput;
use rust_decimal::Decimal;

/// Option codes of the default catalog
pub const DEFAULT_OPTION_CODES: [&str; 3] = ["gps", "baby_seat", "additional_insurance"];

/// Strategy for generating amounts in minor units small enough to never overflow
pub fn amount_strategy() -> impl Strategy<Value = Money> {
    (0u64..1_000_000u64).prop_map(Money::from_minor)
}

/// Strategy for generating percentages with two decimal places
pub fn percentage_strategy() -> impl Strategy<Value = Percentage> {
    (0i64..=10_000i64).prop_map(|n| {
        Percentage::new(Decimal::new(n, 2)).expect("generated percentage is in range")
    })
}

/// Strategy for generating rental periods of 1 to 60 days
pub fn rental_period_strategy() -> impl Strategy<Value = RentalPeriod> {
    (0u64..3650u64, 0u64..60u64).prop_map(|(offset, span)| {
        let base = NaiveDate::from_ymd_opt(2015, 1, 1).expect("valid base date");
        let start = base + Days::new(offset);
        RentalPeriod::new(start, start + Days::new(span)).expect("end follows start")
    })
}

/// Strategy for generating cars with the given id
pub fn car_strategy(id: u64) -> impl Strategy<Value = Car> {
    (0u64..10_000u64, 0u64..100u64).prop_map(move |(per_day, per_km)| {
        Car::new(CarId::new(id), Money::from_minor(per_day), Money::from_minor(per_km))
    })
}

/// Strategy for generating a rental of the given car
pub fn rental_strategy(id: u64, car_id: u64) -> impl Strategy<Value = RentalRequest> {
    (rental_period_strategy(), 0u64..5_000u64).prop_map(move |(period, km)| {
        RentalRequest::new(RentalId::new(id), CarId::new(car_id), period, km)
    })
}

/// Strategy for generating a mix of default option codes, duplicates included
pub fn option_codes_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(DEFAULT_OPTION_CODES.to_vec()), 0..6)
}

/// Strategy for generating valid discount schedules
///
/// Thresholds are strictly increasing and the last tier is unbounded.
pub fn discount_schedule_strategy() -> impl Strategy<Value = DiscountSchedule> {
    (
        prop::collection::btree_set(1u32..30u32, 0..4),
        prop::collection::vec(percentage_strategy(), 5),
    )
        .prop_map(|(thresholds, discounts)| {
            let mut tiers: Vec<DiscountTier> = thresholds
                .into_iter()
                .zip(discounts.iter().copied())
                .map(|(day, discount)| DiscountTier::until(day, discount))
                .collect();
            tiers.push(DiscountTier::remaining(discounts[4]));
            DiscountSchedule::new(tiers).expect("generated schedule is valid")
        })
}

/// Strategy for generating a whole valid batch
///
/// Every rental references one of the generated cars, and options reference
/// generated rentals with codes from the default catalog.
pub fn batch_input_strategy() -> impl Strategy<Value = BatchInput> {
    (1u64..4u64, 1u64..6u64)
        .prop_flat_map(|(car_count, rental_count)| {
            let cars: Vec<_> = (1..=car_count).map(car_strategy).collect();
            let rentals: Vec<_> = (1..=rental_count)
                .map(|id| (1..=car_count).prop_flat_map(move |car_id| rental_strategy(id, car_id)))
                .collect();
            let options = prop::collection::vec(
                (1..=rental_count, prop::sample::select(DEFAULT_OPTION_CODES.to_vec())),
                0..10,
            );
            (cars, rentals, options)
        })
        .prop_map(|(cars, rentals, options)| {
            let options = options
                .into_iter()
                .enumerate()
                .map(|(index, (rental_id, code))| {
                    OptionRequest::new(OptionId::new(index as u64 + 1), RentalId::new(rental_id), code)
                })
                .collect();
            BatchInput::new(cars, rentals, options)
        })
}
