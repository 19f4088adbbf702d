//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the reference rentals. The reference
//! batch has one car at 2000 per day and 10 per km, and three rentals
//! covering the undiscounted, short-discount and long-discount tiers.

use chrono::NaiveDate;
use core_kernel::{CarId, Money, OptionId, RentalId, RentalPeriod};
use domain_billing::OptionRequest;
use domain_pricing::{Car, RentalRequest};
use rental_batch::BatchInput;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Daily rate of the reference car
    pub fn day_rate() -> Money {
        Money::from_minor(2000)
    }

    /// Per-km rate of the reference car
    pub fn km_rate() -> Money {
        Money::from_minor(10)
    }

    /// Price used for the reference commission split
    pub fn reference_price() -> Money {
        Money::from_minor(7000)
    }
}

/// Fixture for calendar dates
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// First day of the reference three-day rental
    pub fn rental_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, 12, 8).unwrap()
    }

    /// Last day of the reference three-day rental
    pub fn rental_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, 12, 10).unwrap()
    }

    /// The reference three-day period
    pub fn three_day_period() -> RentalPeriod {
        RentalPeriod::new(Self::rental_start(), Self::rental_end()).unwrap()
    }
}

/// Fixture for domain records
pub struct RecordFixtures;

impl RecordFixtures {
    /// Car 1 at 2000 per day and 10 per km
    pub fn car() -> Car {
        Car::new(CarId::new(1), MoneyFixtures::day_rate(), MoneyFixtures::km_rate())
    }

    /// Rental 1 of car 1, 2017-12-08 to 2017-12-10, 100 km
    pub fn rental() -> RentalRequest {
        RentalRequest::new(
            RentalId::new(1),
            CarId::new(1),
            TemporalFixtures::three_day_period(),
            100,
        )
    }

    /// An option request
    pub fn option(id: u64, rental_id: u64, code: &str) -> OptionRequest {
        OptionRequest::new(OptionId::new(id), RentalId::new(rental_id), code)
    }
}

/// Fixture for whole batches
pub struct BatchFixtures;

impl BatchFixtures {
    /// JSON document of the reference batch
    pub fn reference_document() -> serde_json::Value {
        serde_json::json!({
            "cars": [
                {"id": 1, "price_per_day": 2000, "price_per_km": 10}
            ],
            "rentals": [
                {"id": 1, "car_id": 1, "start_date": "2015-12-8", "end_date": "2015-12-8", "distance": 100},
                {"id": 2, "car_id": 1, "start_date": "2015-03-31", "end_date": "2015-04-01", "distance": 300},
                {"id": 3, "car_id": 1, "start_date": "2015-07-3", "end_date": "2015-07-14", "distance": 1000}
            ],
            "options": [
                {"id": 1, "rental_id": 1, "type": "gps"},
                {"id": 2, "rental_id": 1, "type": "baby_seat"},
                {"id": 3, "rental_id": 2, "type": "additional_insurance"}
            ]
        })
    }

    /// Reference batch document as text
    pub fn reference_json() -> String {
        Self::reference_document().to_string()
    }

    /// Settlement report expected for the reference batch
    pub fn reference_report() -> serde_json::Value {
        serde_json::json!({
            "rentals": [
                {
                    "id": 1,
                    "options": ["gps", "baby_seat"],
                    "actions": [
                        {"who": "driver", "type": "debit", "amount": 3700},
                        {"who": "owner", "type": "credit", "amount": 2800},
                        {"who": "insurance", "type": "credit", "amount": 450},
                        {"who": "assistance", "type": "credit", "amount": 100},
                        {"who": "platform", "type": "credit", "amount": 350}
                    ]
                },
                {
                    "id": 2,
                    "options": ["additional_insurance"],
                    "actions": [
                        {"who": "driver", "type": "debit", "amount": 8800},
                        {"who": "owner", "type": "credit", "amount": 4760},
                        {"who": "insurance", "type": "credit", "amount": 1020},
                        {"who": "assistance", "type": "credit", "amount": 200},
                        {"who": "platform", "type": "credit", "amount": 2820}
                    ]
                },
                {
                    "id": 3,
                    "options": [],
                    "actions": [
                        {"who": "driver", "type": "debit", "amount": 27800},
                        {"who": "owner", "type": "credit", "amount": 19460},
                        {"who": "insurance", "type": "credit", "amount": 4170},
                        {"who": "assistance", "type": "credit", "amount": 1200},
                        {"who": "platform", "type": "credit", "amount": 2970}
                    ]
                }
            ]
        })
    }

    /// Single-rental batch: the reference car and rental with no options
    pub fn single_rental() -> BatchInput {
        BatchInput::new(vec![RecordFixtures::car()], vec![RecordFixtures::rental()], vec![])
    }
}
