//! Option requests and their per-rental ledger
//!
//! A rental can request each option type at most once. Repeated requests
//! of the same type for the same rental collapse to the first one, and the
//! order in which types first appear is kept.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use core_kernel::{Money, OptionId, RentalId};
use crate::catalog::{Beneficiary, OptionCatalog};
use crate::error::BillingError;

/// A request for an optional extra on a rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRequest {
    /// Request identifier
    pub id: OptionId,
    /// Rental the option is attached to
    pub rental_id: RentalId,
    /// Option code
    #[serde(rename = "type")]
    pub option_type: String,
}

impl OptionRequest {
    /// Creates a new option request
    pub fn new(id: OptionId, rental_id: RentalId, option_type: impl Into<String>) -> Self {
        Self {
            id,
            rental_id,
            option_type: option_type.into(),
        }
    }
}

/// An option priced for a specific rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedOption {
    /// Option code
    pub code: String,
    /// Party credited with the cost
    pub beneficiary: Beneficiary,
    /// Daily rate from the catalog
    pub price_per_day: Money,
    /// Daily rate times rental days
    pub cost: Money,
}

/// The deduplicated, priced options of one rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalOptions {
    rental_id: RentalId,
    options: Vec<PricedOption>,
}

impl RentalOptions {
    /// A rental without options
    pub fn empty(rental_id: RentalId) -> Self {
        Self {
            rental_id,
            options: Vec::new(),
        }
    }

    /// Rental these options belong to
    pub fn rental_id(&self) -> RentalId {
        self.rental_id
    }

    /// Priced options in first-appearance order
    pub fn options(&self) -> &[PricedOption] {
        &self.options
    }

    /// Option codes in first-appearance order
    pub fn codes(&self) -> Vec<String> {
        self.options.iter().map(|o| o.code.clone()).collect()
    }

    /// Sum of all option costs
    pub fn total_price(&self) -> Result<Money, BillingError> {
        Ok(Money::sum(self.options.iter().map(|o| o.cost))?)
    }

    /// Option costs summed per beneficiary
    ///
    /// Beneficiaries without any option are absent from the map.
    pub fn amounts_by_beneficiary(&self) -> Result<BTreeMap<Beneficiary, Money>, BillingError> {
        let mut amounts = BTreeMap::new();
        for option in &self.options {
            let amount = amounts.entry(option.beneficiary).or_insert(Money::ZERO);
            *amount = amount.checked_add(option.cost)?;
        }
        Ok(amounts)
    }
}

/// Index of option requests by rental, priced against a catalog
///
/// The index is built once per batch so that resolving a rental's options
/// does not scan every request.
#[derive(Debug)]
pub struct OptionsLedger<'a> {
    catalog: &'a OptionCatalog,
    codes_by_rental: HashMap<RentalId, Vec<&'a str>>,
}

impl<'a> OptionsLedger<'a> {
    /// Indexes `requests`, keeping the first request of each type per rental
    pub fn new(catalog: &'a OptionCatalog, requests: &'a [OptionRequest]) -> Self {
        let mut codes_by_rental: HashMap<RentalId, Vec<&'a str>> = HashMap::new();

        for request in requests {
            let codes = codes_by_rental.entry(request.rental_id).or_default();
            if !codes.contains(&request.option_type.as_str()) {
                codes.push(request.option_type.as_str());
            }
        }

        Self {
            catalog,
            codes_by_rental,
        }
    }

    /// Returns the catalog used for pricing
    pub fn catalog(&self) -> &OptionCatalog {
        self.catalog
    }

    /// Deduplicated option codes of a rental, without catalog lookup
    pub fn option_codes(&self, rental_id: RentalId) -> &[&'a str] {
        self.codes_by_rental
            .get(&rental_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolves and prices the options of a rental lasting `days` days
    ///
    /// # Errors
    ///
    /// Returns `BillingError::UnknownOptionType` with the rental id attached
    /// if any requested code is not in the catalog.
    pub fn for_rental(&self, rental_id: RentalId, days: u32) -> Result<RentalOptions, BillingError> {
        let options = self
            .option_codes(rental_id)
            .iter()
            .map(|code| -> Result<PricedOption, BillingError> {
                let definition = self.catalog.definition(code)?;
                Ok(PricedOption {
                    code: definition.code.clone(),
                    beneficiary: definition.beneficiary,
                    price_per_day: definition.price_per_day,
                    cost: definition.price_per_day.times(u64::from(days))?,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.for_rental(rental_id))?;

        Ok(RentalOptions { rental_id, options })
    }

    /// Total option cost of a rental
    pub fn total_price(&self, rental_id: RentalId, days: u32) -> Result<Money, BillingError> {
        self.for_rental(rental_id, days)?.total_price()
    }

    /// Option costs of a rental summed per beneficiary
    pub fn amounts_by_beneficiary(
        &self,
        rental_id: RentalId,
        days: u32,
    ) -> Result<BTreeMap<Beneficiary, Money>, BillingError> {
        self.for_rental(rental_id, days)?.amounts_by_beneficiary()
    }
}
