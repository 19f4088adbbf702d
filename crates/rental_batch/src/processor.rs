//! Batch settlement
//!
//! Each rental is joined to its car and its options, priced, split into
//! commission fees and settled into ledger actions. Rentals are independent
//! of each other; the first failure aborts the whole batch.

use std::collections::HashMap;
use tracing::{debug, info, instrument};

use core_kernel::CarId;
use domain_billing::{ActionGenerator, OptionCatalog, OptionsLedger};
use domain_pricing::{Car, CommissionPolicy, RentalPricer, RentalRequest};

use crate::config::PricingConfig;
use crate::error::BatchError;
use crate::input::BatchInput;
use crate::report::{BatchReport, RentalReport};

/// Settles batches of rentals under one pricing configuration
#[derive(Debug, Clone)]
pub struct RentalBatchProcessor {
    pricer: RentalPricer,
    commission: CommissionPolicy,
    catalog: OptionCatalog,
    generator: ActionGenerator,
}

impl Default for RentalBatchProcessor {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

impl RentalBatchProcessor {
    /// Creates a processor from a pricing configuration
    pub fn new(config: PricingConfig) -> Self {
        Self {
            pricer: config.pricer(),
            commission: config.commission,
            catalog: config.options,
            generator: ActionGenerator::new(),
        }
    }

    /// Option catalog used to validate and price options
    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    /// Parses and validates a JSON input document against this processor's catalog
    pub fn parse_input(&self, text: &str) -> Result<BatchInput, BatchError> {
        BatchInput::from_json_str(text, &self.catalog)
    }

    /// Parses, validates and settles a JSON input document
    pub fn process_json(&self, text: &str) -> Result<BatchReport, BatchError> {
        let input = self.parse_input(text)?;
        self.process(&input)
    }

    /// Settles every rental of a batch, in input order
    ///
    /// # Errors
    ///
    /// - `MissingCar` if a rental references a car absent from the batch
    /// - `Pricing` or `Billing` for the first rental that cannot be priced
    ///   or settled
    #[instrument(
        skip_all,
        fields(
            cars = input.cars.len(),
            rentals = input.rentals.len(),
            options = input.options.len()
        )
    )]
    pub fn process(&self, input: &BatchInput) -> Result<BatchReport, BatchError> {
        info!("Processing rental batch");

        let cars: HashMap<CarId, &Car> = input.cars.iter().map(|car| (car.id, car)).collect();
        let options = OptionsLedger::new(&self.catalog, &input.options);

        let rentals = input
            .rentals
            .iter()
            .map(|rental| self.process_rental(rental, &cars, &options))
            .collect::<Result<Vec<_>, _>>()?;

        info!(settled = rentals.len(), "Rental batch processed");

        Ok(BatchReport { rentals })
    }

    #[instrument(skip_all, fields(rental_id = %rental.id))]
    fn process_rental(
        &self,
        rental: &RentalRequest,
        cars: &HashMap<CarId, &Car>,
        options: &OptionsLedger<'_>,
    ) -> Result<RentalReport, BatchError> {
        let car = cars.get(&rental.car_id).ok_or(BatchError::MissingCar {
            rental_id: rental.id,
            car_id: rental.car_id,
        })?;

        let price = self.pricer.price(rental, car)?;
        let commission = self
            .commission
            .split(price.total, price.days)
            .map_err(domain_pricing::PricingError::from)?;
        let rental_options = options.for_rental(rental.id, price.days)?;
        let actions = self
            .generator
            .generate_for(price.total, &commission, &rental_options)?;

        debug!(
            price = %price.total,
            options = rental_options.options().len(),
            "Settled rental"
        );

        Ok(RentalReport {
            id: rental.id,
            options: rental_options.codes(),
            actions,
        })
    }
}
