//! Comprehensive tests for rental_batch

use core_kernel::{Money, Percentage};
use domain_billing::{BillingError, Beneficiary, Direction, OptionCatalog, OptionDefinition, Party};
use domain_pricing::{CommissionPolicy, DiscountSchedule, DiscountTier};
use rental_batch::{BatchError, BatchInput, PricingConfig, RentalBatchProcessor, ValidationError};
use test_utils::{
    assert_action, assert_balanced, assert_settlement_layout, BatchFixtures, BatchInputBuilder,
    CarBuilder, RentalBuilder,
};

// ============================================================================
// Reference Batch Tests
// ============================================================================

mod reference_batch_tests {
    use super::*;

    #[test]
    fn test_reference_report() {
        let report = RentalBatchProcessor::default()
            .process_json(&BatchFixtures::reference_json())
            .unwrap();

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            BatchFixtures::reference_report()
        );
    }

    #[test]
    fn test_every_rental_is_balanced() {
        let report = RentalBatchProcessor::default()
            .process_json(&BatchFixtures::reference_json())
            .unwrap();

        for rental in &report.rentals {
            assert_settlement_layout(&rental.actions);
            assert_balanced(&rental.actions);
        }
    }

    #[test]
    fn test_output_is_byte_identical_across_runs() {
        let processor = RentalBatchProcessor::default();
        let input = BatchFixtures::reference_json();

        let first = processor.process_json(&input).unwrap().to_json_pretty().unwrap();
        let second = processor.process_json(&input).unwrap().to_json_pretty().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_document_without_options_key() {
        let mut document = BatchFixtures::reference_document();
        document.as_object_mut().unwrap().remove("options");

        let report = RentalBatchProcessor::default()
            .process_json(&document.to_string())
            .unwrap();

        assert!(report.rentals.iter().all(|r| r.options.is_empty()));
        assert_action(&report.rentals[0].actions, Party::Driver, Direction::Debit, 3000);
    }

    #[test]
    fn test_empty_batch() {
        let report = RentalBatchProcessor::default()
            .process_json(r#"{"cars": [], "rentals": []}"#)
            .unwrap();
        assert!(report.rentals.is_empty());
    }
}

// ============================================================================
// Scenario Tests
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_three_day_rental_with_owner_options() {
        // 3 days at 2000 with 100 km: time 5600, distance 1000, price 6600
        let input = BatchInputBuilder::new()
            .car(CarBuilder::new().build())
            .rental(RentalBuilder::new().build())
            .option(1, "gps")
            .option(1, "baby_seat")
            .option(1, "gps")
            .build();

        let report = RentalBatchProcessor::default().process(&input).unwrap();
        let rental = &report.rentals[0];

        assert_eq!(rental.options, vec!["gps", "baby_seat"]);
        assert_action(&rental.actions, Party::Driver, Direction::Debit, 6600 + 2100);
        assert_action(&rental.actions, Party::Owner, Direction::Credit, 4620 + 2100);
        assert_action(&rental.actions, Party::Insurance, Direction::Credit, 990);
        assert_action(&rental.actions, Party::Assistance, Direction::Credit, 300);
        assert_action(&rental.actions, Party::Platform, Direction::Credit, 690);
        assert_balanced(&rental.actions);
    }

    #[test]
    fn test_rentals_do_not_share_options() {
        let input = BatchInputBuilder::new()
            .car(CarBuilder::new().build())
            .rental(RentalBuilder::new().with_id(1).build())
            .rental(RentalBuilder::new().with_id(2).build())
            .option(2, "additional_insurance")
            .build();

        let report = RentalBatchProcessor::default().process(&input).unwrap();

        assert!(report.rentals[0].options.is_empty());
        assert_action(&report.rentals[0].actions, Party::Platform, Direction::Credit, 690);
        assert_eq!(report.rentals[1].options, vec!["additional_insurance"]);
        assert_action(&report.rentals[1].actions, Party::Platform, Direction::Credit, 690 + 3000);
    }

    #[test]
    fn test_fees_above_price_abort_batch() {
        // 10 days at 100 with no distance: price 790, commission 237,
        // insurance 118, assistance 1000
        let input = BatchInputBuilder::new()
            .car(CarBuilder::new().with_price_per_day(100).with_price_per_km(0).build())
            .rental(RentalBuilder::new().for_days(10).with_distance(0).build())
            .build();

        let err = RentalBatchProcessor::default().process(&input).unwrap_err();
        assert!(matches!(
            err,
            BatchError::Billing(BillingError::UnbalancedSettlement { .. })
        ));
    }

    #[test]
    fn test_platform_fee_floored_with_balanced_settlement() {
        // 9 days at 300 with no distance: price 2160, commission 648,
        // insurance 324, assistance 900, platform 0
        let input = BatchInputBuilder::new()
            .car(CarBuilder::new().with_price_per_day(300).with_price_per_km(0).build())
            .rental(RentalBuilder::new().for_days(9).with_distance(0).build())
            .build();

        let report = RentalBatchProcessor::default().process(&input).unwrap();
        let actions = &report.rentals[0].actions;

        assert_action(actions, Party::Driver, Direction::Debit, 2160);
        assert_action(actions, Party::Platform, Direction::Credit, 0);
        assert_action(actions, Party::Owner, Direction::Credit, 936);
        assert_balanced(actions);
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod configuration_tests {
    use super::*;

    #[test]
    fn test_alternate_schedule_and_commission() {
        let config = PricingConfig {
            discount_tiers: DiscountSchedule::new(vec![DiscountTier::remaining(
                Percentage::from_whole(0),
            )])
            .unwrap(),
            commission: CommissionPolicy {
                rate: Percentage::from_whole(20),
                insurance_share: Percentage::from_whole(50),
                assistance_fee_per_day: Money::from_minor(50),
            },
            options: OptionCatalog::default(),
        };

        let report = RentalBatchProcessor::new(config)
            .process(&BatchFixtures::single_rental())
            .unwrap();
        let actions = &report.rentals[0].actions;

        // price 7000, commission 1400, insurance 700, assistance 150
        assert_action(actions, Party::Driver, Direction::Debit, 7000);
        assert_action(actions, Party::Owner, Direction::Credit, 5600);
        assert_action(actions, Party::Insurance, Direction::Credit, 700);
        assert_action(actions, Party::Assistance, Direction::Credit, 150);
        assert_action(actions, Party::Platform, Direction::Credit, 550);
    }

    #[test]
    fn test_alternate_catalog_drives_validation() {
        let config = PricingConfig {
            options: OptionCatalog::new(vec![OptionDefinition::new(
                "roof_box",
                Money::from_minor(400),
                Beneficiary::Owner,
            )])
            .unwrap(),
            ..PricingConfig::default()
        };
        let processor = RentalBatchProcessor::new(config);

        let mut document = BatchFixtures::reference_document();
        document["options"] = serde_json::json!([{"id": 1, "rental_id": 3, "type": "roof_box"}]);
        let report = processor.process_json(&document.to_string()).unwrap();
        assert_eq!(report.rentals[2].options, vec!["roof_box"]);
        assert_action(&report.rentals[2].actions, Party::Owner, Direction::Credit, 19460 + 4800);

        let err = processor
            .process_json(&BatchFixtures::reference_json())
            .unwrap_err();
        assert!(matches!(
            err,
            BatchError::Validation(ValidationError::InvalidField { field: "type", .. })
        ));
    }
}

// ============================================================================
// Input Error Tests
// ============================================================================

mod input_error_tests {
    use super::*;

    #[test]
    fn test_malformed_json_is_reported() {
        let err = RentalBatchProcessor::default()
            .process_json("not json")
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON format"));
    }

    #[test]
    fn test_first_error_wins() {
        let mut document = BatchFixtures::reference_document();
        document["cars"][0]["price_per_km"] = serde_json::json!("ten");
        document["rentals"][1]["distance"] = serde_json::json!(-1);

        let err = BatchInput::from_json_str(&document.to_string(), &OptionCatalog::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Car at index 0 has invalid price_per_km: must be non-negative integer, got \"ten\""
        );
    }

    #[test]
    fn test_dangling_car_reference() {
        let mut document = BatchFixtures::reference_document();
        document["rentals"][2]["car_id"] = serde_json::json!(4);

        let err = RentalBatchProcessor::default()
            .process_json(&document.to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "Rental at index 2 references non-existent car_id: 4");
    }

    #[test]
    fn test_missing_car_without_validation() {
        let input = BatchInputBuilder::new()
            .rental(RentalBuilder::new().with_car_id(5).build())
            .build();

        let err = RentalBatchProcessor::default().process(&input).unwrap_err();
        assert!(matches!(err, BatchError::MissingCar { .. }));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::batch_input_strategy;

    proptest! {
        #[test]
        fn settled_batches_are_balanced(input in batch_input_strategy()) {
            match RentalBatchProcessor::default().process(&input) {
                Ok(report) => {
                    prop_assert_eq!(report.rentals.len(), input.rentals.len());
                    for rental in &report.rentals {
                        assert_balanced(&rental.actions);
                    }
                }
                Err(err) => {
                    // only fees larger than a very cheap rental can fail
                    let unbalanced = matches!(
                        err,
                        BatchError::Billing(BillingError::UnbalancedSettlement { .. })
                    );
                    prop_assert!(unbalanced);
                }
            }
        }

        #[test]
        fn processing_is_deterministic(input in batch_input_strategy()) {
            let processor = RentalBatchProcessor::default();
            let first = processor.process(&input).ok();
            let second = processor.process(&input).ok();
            prop_assert_eq!(first, second);
        }
    }
}
