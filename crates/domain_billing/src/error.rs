//! Billing domain errors

use thiserror::Error;

use core_kernel::{Money, MoneyError, RentalId};

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// Option code is not in the catalog
    #[error(
        "Unknown option type '{code}'{}. Valid types are: {}",
        rental_context(.rental_id),
        .valid_codes.join(", ")
    )]
    UnknownOptionType {
        code: String,
        valid_codes: Vec<String>,
        rental_id: Option<RentalId>,
    },

    /// Option catalog configuration is inconsistent
    #[error("Invalid option catalog: {0}")]
    InvalidCatalog(String),

    /// Generated actions do not balance
    #[error(
        "Unbalanced settlement{}: debits={debits}, credits={credits}",
        rental_context(.rental_id)
    )]
    UnbalancedSettlement {
        debits: Money,
        credits: Money,
        rental_id: Option<RentalId>,
    },

    /// Monetary calculation failed
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl BillingError {
    /// Attaches the rental being processed to the error
    pub fn for_rental(self, rental_id: RentalId) -> Self {
        match self {
            BillingError::UnknownOptionType {
                code, valid_codes, ..
            } => BillingError::UnknownOptionType {
                code,
                valid_codes,
                rental_id: Some(rental_id),
            },
            BillingError::UnbalancedSettlement { debits, credits, .. } => {
                BillingError::UnbalancedSettlement {
                    debits,
                    credits,
                    rental_id: Some(rental_id),
                }
            }
            other => other,
        }
    }
}

fn rental_context(rental_id: &Option<RentalId>) -> String {
    match rental_id {
        Some(id) => format!(" for rental {}", id),
        None => String::new(),
    }
}
