//! Unit tests for calendar date parsing and rental periods

use chrono::NaiveDate;
use core_kernel::{parse_calendar_date, rental_days, RentalPeriod, TemporalError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod parsing {
    use super::*;

    #[test]
    fn test_padded_and_unpadded_forms_agree() {
        assert_eq!(
            parse_calendar_date("2017-12-08").unwrap(),
            parse_calendar_date("2017-12-8").unwrap()
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_calendar_date(" 2017-12-8 ").unwrap(), date(2017, 12, 8));
    }

    #[test]
    fn test_invalid_date_keeps_offending_value() {
        match parse_calendar_date("2017-13-01") {
            Err(TemporalError::InvalidDate { value, .. }) => assert_eq!(value, "2017-13-01"),
            other => panic!("expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_string_is_invalid() {
        assert!(parse_calendar_date("").is_err());
    }
}

mod rental_period {
    use super::*;

    #[test]
    fn test_single_day_period() {
        let period = RentalPeriod::new(date(2015, 12, 8), date(2015, 12, 8)).unwrap();
        assert_eq!(period.days(), 1);
        assert_eq!(period.start(), period.end());
    }

    #[test]
    fn test_period_across_year_end() {
        let period = RentalPeriod::parse("2017-12-30", "2018-1-2").unwrap();
        assert_eq!(period.days(), 4);
    }

    #[test]
    fn test_reversed_period_is_rejected() {
        let err = RentalPeriod::new(date(2017, 12, 10), date(2017, 12, 8)).unwrap_err();
        assert_eq!(
            err,
            TemporalError::InvalidPeriod {
                start: date(2017, 12, 10),
                end: date(2017, 12, 8),
            }
        );
    }

    #[test]
    fn test_rental_days_never_zero() {
        for offset in 0..40u64 {
            let start = date(2017, 12, 1);
            let end = start + chrono::Days::new(offset);
            let period = RentalPeriod::new(start, end).unwrap();
            assert_eq!(period.days() as u64, offset + 1);
        }
    }

    #[test]
    fn test_rental_days_reports_unparseable_bound() {
        assert!(matches!(
            rental_days("2017-12-8", "tomorrow"),
            Err(TemporalError::InvalidDate { .. })
        ));
    }
}
