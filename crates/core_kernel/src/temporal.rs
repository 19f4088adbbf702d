//! Calendar dates and inclusive rental periods
//!
//! Rental dates are plain calendar dates without a time component. A rental
//! that starts and ends on the same date lasts one day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accepted input format; month and day may omit their leading zero
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors related to dates and periods
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate {
        value: String,
        reason: String,
    },

    #[error("Invalid period: end date {end} is before start date {start}")]
    InvalidPeriod {
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Period from {start} to {end} is too long")]
    PeriodTooLong {
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Parses a `YYYY-M-D` or `YYYY-MM-DD` calendar date
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| TemporalError::InvalidDate {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Counts rental days between two date strings, inclusive of both ends
///
/// # Errors
///
/// - `InvalidDate` if either input is not a calendar date
/// - `InvalidPeriod` if `end` falls before `start`
///
/// # Example
///
/// ```
/// use core_kernel::rental_days;
///
/// assert_eq!(rental_days("2017-12-8", "2017-12-10").unwrap(), 3);
/// ```
pub fn rental_days(start: &str, end: &str) -> Result<u32, TemporalError> {
    let period = RentalPeriod::new(parse_calendar_date(start)?, parse_calendar_date(end)?)?;
    Ok(period.days())
}

/// An inclusive range of calendar dates with its day count precomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PeriodBounds", into = "PeriodBounds")]
pub struct RentalPeriod {
    start: NaiveDate,
    end: NaiveDate,
    days: u32,
}

impl RentalPeriod {
    /// Creates a period, rejecting one whose end precedes its start
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if end < start {
            return Err(TemporalError::InvalidPeriod { start, end });
        }

        let span = (end - start).num_days() + 1;
        let days = u32::try_from(span).map_err(|_| TemporalError::PeriodTooLong { start, end })?;

        Ok(Self { start, end, days })
    }

    /// Parses both bounds and builds the period
    pub fn parse(start: &str, end: &str) -> Result<Self, TemporalError> {
        Self::new(parse_calendar_date(start)?, parse_calendar_date(end)?)
    }

    /// First rental day
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last rental day
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of rental days, always at least 1
    pub fn days(&self) -> u32 {
        self.days
    }
}

#[derive(Serialize, Deserialize)]
struct PeriodBounds {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<PeriodBounds> for RentalPeriod {
    type Error = TemporalError;

    fn try_from(bounds: PeriodBounds) -> Result<Self, Self::Error> {
        RentalPeriod::new(bounds.start, bounds.end)
    }
}

impl From<RentalPeriod> for PeriodBounds {
    fn from(period: RentalPeriod) -> Self {
        PeriodBounds {
            start: period.start,
            end: period.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpadded_dates() {
        let date = parse_calendar_date("2017-12-8").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2017, 12, 8).unwrap());

        let date = parse_calendar_date("2017-1-05").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2017, 1, 5).unwrap());
    }

    #[test]
    fn test_invalid_date() {
        assert!(matches!(
            parse_calendar_date("2017-02-30"),
            Err(TemporalError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_calendar_date("not a date"),
            Err(TemporalError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_rental_days_inclusive() {
        assert_eq!(rental_days("2015-12-8", "2015-12-8").unwrap(), 1);
        assert_eq!(rental_days("2017-12-8", "2017-12-10").unwrap(), 3);
        assert_eq!(rental_days("2015-03-31", "2015-04-01").unwrap(), 2);
        assert_eq!(rental_days("2015-07-3", "2015-07-14").unwrap(), 12);
    }

    #[test]
    fn test_rental_days_across_leap_day() {
        assert_eq!(rental_days("2016-02-28", "2016-03-01").unwrap(), 3);
        assert_eq!(rental_days("2017-02-28", "2017-03-01").unwrap(), 2);
    }

    #[test]
    fn test_end_before_start() {
        let result = rental_days("2017-12-10", "2017-12-8");
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_period_round_trips_through_serde() {
        let period = RentalPeriod::parse("2017-12-8", "2017-12-10").unwrap();
        let json = serde_json::to_string(&period).unwrap();
        let back: RentalPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, period);
        assert_eq!(back.days(), 3);
    }
}
