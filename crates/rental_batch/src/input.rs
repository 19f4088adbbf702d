//! Batch input document

use domain_billing::{OptionCatalog, OptionRequest};
use domain_pricing::{Car, RentalRequest};

use crate::error::BatchError;
use crate::validation::InputValidator;

/// Validated, typed contents of an input document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchInput {
    /// Cars in document order
    pub cars: Vec<Car>,
    /// Rentals in document order; the report follows this order
    pub rentals: Vec<RentalRequest>,
    /// Option requests in document order
    pub options: Vec<OptionRequest>,
}

impl BatchInput {
    /// Creates a batch from already validated records
    pub fn new(cars: Vec<Car>, rentals: Vec<RentalRequest>, options: Vec<OptionRequest>) -> Self {
        Self {
            cars,
            rentals,
            options,
        }
    }

    /// Parses and validates a JSON input document
    ///
    /// Option types are checked against `catalog`.
    ///
    /// # Errors
    ///
    /// - `BatchError::Json` if `text` is not valid JSON
    /// - `BatchError::Validation` for the first record that fails validation
    pub fn from_json_str(text: &str, catalog: &OptionCatalog) -> Result<Self, BatchError> {
        let document: serde_json::Value = serde_json::from_str(text)?;
        Ok(InputValidator::new(catalog).validate(&document)?)
    }

    /// Returns true if the batch has no rentals
    pub fn is_empty(&self) -> bool {
        self.rentals.is_empty()
    }
}
