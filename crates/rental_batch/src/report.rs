//! Batch output document

use serde::{Deserialize, Serialize};

use core_kernel::RentalId;
use domain_billing::LedgerAction;

use crate::error::BatchError;

/// Settlement of one rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalReport {
    /// Rental identifier
    pub id: RentalId,
    /// Deduplicated option codes in first-appearance order
    pub options: Vec<String>,
    /// Driver debit followed by the four credits
    pub actions: Vec<LedgerAction>,
}

/// Settlement of a whole batch, one entry per rental in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub rentals: Vec<RentalReport>,
}

impl BatchReport {
    /// Renders the report as pretty-printed JSON ending with a newline
    pub fn to_json_pretty(&self) -> Result<String, BatchError> {
        let mut text = serde_json::to_string_pretty(self).map_err(BatchError::Serialization)?;
        text.push('\n');
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Money;
    use domain_billing::Party;

    #[test]
    fn test_report_shape() {
        let report = BatchReport {
            rentals: vec![RentalReport {
                id: RentalId::new(1),
                options: vec!["gps".to_string()],
                actions: vec![
                    LedgerAction::debit(Party::Driver, Money::from_minor(3700)),
                    LedgerAction::credit(Party::Owner, Money::from_minor(2800)),
                ],
            }],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "rentals": [{
                    "id": 1,
                    "options": ["gps"],
                    "actions": [
                        {"who": "driver", "type": "debit", "amount": 3700},
                        {"who": "owner", "type": "credit", "amount": 2800}
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_pretty_output_ends_with_newline() {
        let text = BatchReport::default().to_json_pretty().unwrap();
        assert_eq!(text, "{\n  \"rentals\": []\n}\n");
    }
}
