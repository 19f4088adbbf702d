//! Structural and referential validation of input documents
//!
//! The validator walks a parsed JSON document and either produces typed
//! records or stops at the first problem it finds. Checks run in a fixed
//! order: document structure, cars, rentals, options, then references
//! between records.

use serde_json::{Map, Value};
use std::collections::HashSet;

use core_kernel::{CarId, Money, OptionId, RentalId, RentalPeriod, TemporalError};
use domain_billing::{OptionCatalog, OptionRequest};
use domain_pricing::{Car, RentalRequest};

use crate::error::{Entity, ValidationError};
use crate::input::BatchInput;

const CAR_FIELDS: &[&str] = &["id", "price_per_day", "price_per_km"];
const RENTAL_FIELDS: &[&str] = &["id", "car_id", "start_date", "end_date", "distance"];
const OPTION_FIELDS: &[&str] = &["id", "rental_id", "type"];

static NULL: Value = Value::Null;

/// Validates input documents against an option catalog
#[derive(Debug, Clone, Copy)]
pub struct InputValidator<'a> {
    catalog: &'a OptionCatalog,
}

impl<'a> InputValidator<'a> {
    /// Creates a validator accepting the option types of `catalog`
    pub fn new(catalog: &'a OptionCatalog) -> Self {
        Self { catalog }
    }

    /// Validates a document and converts it into typed records
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` encountered.
    pub fn validate(&self, document: &Value) -> Result<BatchInput, ValidationError> {
        let (cars, rentals, options) = sections(document)?;

        let cars = cars
            .iter()
            .enumerate()
            .map(|(index, car)| validate_car(index, car))
            .collect::<Result<Vec<_>, _>>()?;
        let rentals = rentals
            .iter()
            .enumerate()
            .map(|(index, rental)| validate_rental(index, rental))
            .collect::<Result<Vec<_>, _>>()?;
        let options = options
            .iter()
            .enumerate()
            .map(|(index, option)| self.validate_option(index, option))
            .collect::<Result<Vec<_>, _>>()?;

        check_references(&cars, &rentals, &options)?;

        Ok(BatchInput::new(cars, rentals, options))
    }

    fn validate_option(&self, index: usize, option: &Value) -> Result<OptionRequest, ValidationError> {
        let record = record(Entity::Option, index, option, OPTION_FIELDS)?;

        let id = positive_integer(Entity::Option, index, record, "id")?;
        let rental_id = positive_integer(Entity::Option, index, record, "rental_id")?;

        let option_type = field(record, "type");
        let code = option_type
            .as_str()
            .filter(|code| self.catalog.contains(code))
            .ok_or_else(|| ValidationError::InvalidField {
                entity: Entity::Option,
                index,
                field: "type",
                expected: format!("one of {}", self.catalog.valid_codes().join(", ")),
                value: option_type.clone(),
            })?;

        Ok(OptionRequest::new(
            OptionId::new(id),
            RentalId::new(rental_id),
            code,
        ))
    }
}

type Sections<'v> = (&'v [Value], &'v [Value], &'v [Value]);

fn sections(document: &Value) -> Result<Sections<'_>, ValidationError> {
    let object = document
        .as_object()
        .filter(|o| o.contains_key("cars") && o.contains_key("rentals"))
        .ok_or_else(|| {
            ValidationError::InvalidStructure("must contain 'cars' and 'rentals' keys".to_string())
        })?;

    let (Some(cars), Some(rentals)) = (
        field(object, "cars").as_array(),
        field(object, "rentals").as_array(),
    ) else {
        return Err(ValidationError::InvalidStructure(
            "'cars' and 'rentals' must be arrays".to_string(),
        ));
    };

    let options: &[Value] = match object.get("options") {
        None | Some(Value::Null) => &[],
        Some(Value::Array(options)) => options,
        Some(_) => {
            return Err(ValidationError::InvalidStructure(
                "'options' must be an array".to_string(),
            ))
        }
    };

    Ok((cars, rentals, options))
}

fn record<'v>(
    entity: Entity,
    index: usize,
    value: &'v Value,
    required: &[&'static str],
) -> Result<&'v Map<String, Value>, ValidationError> {
    let object = value.as_object().ok_or_else(|| {
        ValidationError::InvalidStructure(format!("{} at index {} must be an object", entity, index))
    })?;

    if let Some(missing) = required.iter().find(|f| !object.contains_key(**f)) {
        return Err(ValidationError::MissingField {
            entity,
            index,
            field: *missing,
        });
    }

    Ok(object)
}

fn field<'v>(record: &'v Map<String, Value>, name: &str) -> &'v Value {
    record.get(name).unwrap_or(&NULL)
}

fn integer_field(
    entity: Entity,
    index: usize,
    record: &Map<String, Value>,
    name: &'static str,
    minimum: u64,
) -> Result<u64, ValidationError> {
    let value = field(record, name);
    value
        .as_u64()
        .filter(|n| *n >= minimum)
        .ok_or_else(|| ValidationError::InvalidField {
            entity,
            index,
            field: name,
            expected: if minimum > 0 {
                "positive integer".to_string()
            } else {
                "non-negative integer".to_string()
            },
            value: value.clone(),
        })
}

fn positive_integer(
    entity: Entity,
    index: usize,
    record: &Map<String, Value>,
    name: &'static str,
) -> Result<u64, ValidationError> {
    integer_field(entity, index, record, name, 1)
}

fn non_negative_integer(
    entity: Entity,
    index: usize,
    record: &Map<String, Value>,
    name: &'static str,
) -> Result<u64, ValidationError> {
    integer_field(entity, index, record, name, 0)
}

fn validate_car(index: usize, car: &Value) -> Result<Car, ValidationError> {
    let record = record(Entity::Car, index, car, CAR_FIELDS)?;

    let id = positive_integer(Entity::Car, index, record, "id")?;
    let price_per_day = non_negative_integer(Entity::Car, index, record, "price_per_day")?;
    let price_per_km = non_negative_integer(Entity::Car, index, record, "price_per_km")?;

    Ok(Car::new(
        CarId::new(id),
        Money::from_minor(price_per_day),
        Money::from_minor(price_per_km),
    ))
}

fn validate_rental(index: usize, rental: &Value) -> Result<RentalRequest, ValidationError> {
    let record = record(Entity::Rental, index, rental, RENTAL_FIELDS)?;

    let id = positive_integer(Entity::Rental, index, record, "id")?;
    let car_id = positive_integer(Entity::Rental, index, record, "car_id")?;
    let distance = non_negative_integer(Entity::Rental, index, record, "distance")?;
    let period = validate_period(index, record)?;

    Ok(RentalRequest::new(
        RentalId::new(id),
        CarId::new(car_id),
        period,
        distance,
    ))
}

fn date_text<'v>(
    index: usize,
    record: &'v Map<String, Value>,
    name: &'static str,
) -> Result<&'v str, ValidationError> {
    let value = field(record, name);
    value.as_str().ok_or_else(|| ValidationError::InvalidField {
        entity: Entity::Rental,
        index,
        field: name,
        expected: "a date string".to_string(),
        value: value.clone(),
    })
}

fn validate_period(index: usize, record: &Map<String, Value>) -> Result<RentalPeriod, ValidationError> {
    let start = date_text(index, record, "start_date")?;
    let end = date_text(index, record, "end_date")?;

    RentalPeriod::parse(start, end).map_err(|source| match source {
        TemporalError::InvalidPeriod { .. } => ValidationError::InvalidDates { index },
        source => ValidationError::InvalidDateFormat { index, source },
    })
}

fn check_references(
    cars: &[Car],
    rentals: &[RentalRequest],
    options: &[OptionRequest],
) -> Result<(), ValidationError> {
    let car_ids: HashSet<CarId> = cars.iter().map(|c| c.id).collect();
    if let Some((index, rental)) = rentals
        .iter()
        .enumerate()
        .find(|(_, r)| !car_ids.contains(&r.car_id))
    {
        return Err(ValidationError::DanglingReference {
            entity: Entity::Rental,
            index,
            field: "car_id",
            id: rental.car_id.value(),
        });
    }

    let rental_ids: HashSet<RentalId> = rentals.iter().map(|r| r.id).collect();
    if let Some((index, option)) = options
        .iter()
        .enumerate()
        .find(|(_, o)| !rental_ids.contains(&o.rental_id))
    {
        return Err(ValidationError::DanglingReference {
            entity: Entity::Option,
            index,
            field: "rental_id",
            id: option.rental_id.value(),
        });
    }

    Ok(())
}
