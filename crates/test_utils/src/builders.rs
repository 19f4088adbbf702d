//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{Days, NaiveDate};
use core_kernel::{CarId, Money, OptionId, RentalId, RentalPeriod};
use domain_billing::OptionRequest;
use domain_pricing::{Car, RentalRequest};
use rental_batch::BatchInput;

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for constructing test cars
pub struct CarBuilder {
    id: CarId,
    price_per_day: Money,
    price_per_km: Money,
}

impl Default for CarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CarBuilder {
    /// Creates a builder for the reference car
    pub fn new() -> Self {
        Self {
            id: CarId::new(1),
            price_per_day: MoneyFixtures::day_rate(),
            price_per_km: MoneyFixtures::km_rate(),
        }
    }

    /// Sets the car ID
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = CarId::new(id);
        self
    }

    /// Sets the daily rate
    pub fn with_price_per_day(mut self, minor: u64) -> Self {
        self.price_per_day = Money::from_minor(minor);
        self
    }

    /// Sets the per-km rate
    pub fn with_price_per_km(mut self, minor: u64) -> Self {
        self.price_per_km = Money::from_minor(minor);
        self
    }

    /// Builds the car
    pub fn build(self) -> Car {
        Car::new(self.id, self.price_per_day, self.price_per_km)
    }
}

/// Builder for constructing test rentals
pub struct RentalBuilder {
    id: RentalId,
    car_id: CarId,
    start: NaiveDate,
    days: u32,
    distance_km: u64,
}

impl Default for RentalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RentalBuilder {
    /// Creates a builder for the reference three-day, 100 km rental
    pub fn new() -> Self {
        Self {
            id: RentalId::new(1),
            car_id: CarId::new(1),
            start: TemporalFixtures::rental_start(),
            days: 3,
            distance_km: 100,
        }
    }

    /// Sets the rental ID
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = RentalId::new(id);
        self
    }

    /// Sets the rented car
    pub fn with_car_id(mut self, car_id: u64) -> Self {
        self.car_id = CarId::new(car_id);
        self
    }

    /// Sets the first rental day
    pub fn starting(mut self, start: NaiveDate) -> Self {
        self.start = start;
        self
    }

    /// Sets the number of rental days (at least 1)
    pub fn for_days(mut self, days: u32) -> Self {
        self.days = days.max(1);
        self
    }

    /// Sets the distance driven
    pub fn with_distance(mut self, km: u64) -> Self {
        self.distance_km = km;
        self
    }

    /// Builds the rental
    ///
    /// # Panics
    ///
    /// Panics if the end date falls outside the calendar range.
    pub fn build(self) -> RentalRequest {
        let end = self
            .start
            .checked_add_days(Days::new(u64::from(self.days - 1)))
            .expect("rental end date out of range");
        let period = RentalPeriod::new(self.start, end).expect("rental period is valid");
        RentalRequest::new(self.id, self.car_id, period, self.distance_km)
    }
}

/// Builder for constructing batch inputs
#[derive(Default)]
pub struct BatchInputBuilder {
    cars: Vec<Car>,
    rentals: Vec<RentalRequest>,
    options: Vec<OptionRequest>,
}

impl BatchInputBuilder {
    /// Creates an empty batch builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a car
    pub fn car(mut self, car: Car) -> Self {
        self.cars.push(car);
        self
    }

    /// Adds a rental
    pub fn rental(mut self, rental: RentalRequest) -> Self {
        self.rentals.push(rental);
        self
    }

    /// Adds an option request, numbering it after the options already added
    pub fn option(mut self, rental_id: u64, code: &str) -> Self {
        let id = self.options.len() as u64 + 1;
        self.options
            .push(OptionRequest::new(OptionId::new(id), RentalId::new(rental_id), code));
        self
    }

    /// Builds the batch
    pub fn build(self) -> BatchInput {
        BatchInput::new(self.cars, self.rentals, self.options)
    }
}
