//! Cars, rental requests and the rental price
//!
//! The rental price is the discounted time cost plus the distance cost.
//! Option costs are not part of it; they are added by the billing domain.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{CarId, Money, MoneyError, RentalId, RentalPeriod};
use crate::discount::DiscountSchedule;
use crate::error::PricingError;

/// A car available for rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Car identifier
    pub id: CarId,
    /// Undiscounted daily rate
    pub price_per_day: Money,
    /// Rate per kilometre driven
    pub price_per_km: Money,
}

impl Car {
    /// Creates a new car
    pub fn new(id: CarId, price_per_day: Money, price_per_km: Money) -> Self {
        Self {
            id,
            price_per_day,
            price_per_km,
        }
    }
}

/// A validated rental request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRequest {
    /// Rental identifier
    pub id: RentalId,
    /// Car being rented
    pub car_id: CarId,
    /// Inclusive rental dates; the day count is computed once here
    pub period: RentalPeriod,
    /// Distance driven in kilometres
    pub distance_km: u64,
}

impl RentalRequest {
    /// Creates a new rental request
    pub fn new(id: RentalId, car_id: CarId, period: RentalPeriod, distance_km: u64) -> Self {
        Self {
            id,
            car_id,
            period,
            distance_km,
        }
    }

    /// Number of rental days
    pub fn days(&self) -> u32 {
        self.period.days()
    }
}

/// Breakdown of a rental price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RentalPrice {
    /// Number of rental days
    pub days: u32,
    /// Discounted time cost
    pub time_cost: Money,
    /// Distance cost
    pub distance_cost: Money,
    /// Time cost plus distance cost
    pub total: Money,
}

/// Cost of driving `distance_km` at `price_per_km`
pub fn distance_cost(distance_km: u64, price_per_km: Money) -> Result<Money, MoneyError> {
    price_per_km.times(distance_km)
}

/// Prices rentals against a discount schedule
#[derive(Debug, Clone, Default)]
pub struct RentalPricer {
    schedule: DiscountSchedule,
}

impl RentalPricer {
    /// Creates a pricer using the given discount schedule
    pub fn new(schedule: DiscountSchedule) -> Self {
        Self { schedule }
    }

    /// Returns the discount schedule in use
    pub fn schedule(&self) -> &DiscountSchedule {
        &self.schedule
    }

    /// Computes the price of a rental
    ///
    /// # Arguments
    ///
    /// * `rental` - The rental to price
    /// * `car` - The car the rental references
    ///
    /// # Errors
    ///
    /// - `CarMismatch` if `car` is not the car referenced by `rental`
    /// - `Money` if a cost overflows
    pub fn price(&self, rental: &RentalRequest, car: &Car) -> Result<RentalPrice, PricingError> {
        if rental.car_id != car.id {
            return Err(PricingError::CarMismatch {
                rental_id: rental.id,
                expected: rental.car_id,
                actual: car.id,
            });
        }

        let days = rental.days();
        let time_cost = self.schedule.time_cost(days, car.price_per_day)?;
        let distance_cost = distance_cost(rental.distance_km, car.price_per_km)?;
        let total = time_cost.checked_add(distance_cost)?;

        debug!(
            rental_id = %rental.id,
            days,
            %time_cost,
            %distance_cost,
            %total,
            "Priced rental"
        );

        Ok(RentalPrice {
            days,
            time_cost,
            distance_cost,
            total,
        })
    }
}
