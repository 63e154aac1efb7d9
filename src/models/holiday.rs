//! Public holiday model.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single calendar date designated a public holiday.
///
/// The `source_year` records which year's holiday data the date was loaded
/// from. It only tells the presenter which years have authoritative holiday
/// data; classification treats all holidays as one flat set of dates.
///
/// # Example
///
/// ```
/// use leave_planner::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday::new(NaiveDate::from_ymd_opt(2026, 8, 9).unwrap());
/// assert_eq!(holiday.source_year, 2026);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The year of the holiday data this date came from.
    pub source_year: i32,
}

impl PublicHoliday {
    /// Creates a holiday tagged with its own calendar year.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            source_year: date.year(),
        }
    }

    /// Creates a holiday tagged with an explicit source year.
    pub fn with_source_year(date: NaiveDate, source_year: i32) -> Self {
        Self { date, source_year }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_date_year() {
        let holiday = PublicHoliday::new(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
        assert_eq!(holiday.source_year, 2027);
    }

    #[test]
    fn test_explicit_source_year_is_kept() {
        // A 2026 data file may list the following New Year's Day
        let holiday =
            PublicHoliday::with_source_year(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(), 2026);
        assert_eq!(holiday.source_year, 2026);
    }

    #[test]
    fn test_deserialize_public_holiday() {
        let json = r#"{ "date": "2026-12-25", "source_year": 2026 }"#;
        let holiday: PublicHoliday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.date, NaiveDate::from_ymd_opt(2026, 12, 25).unwrap());
        assert_eq!(holiday.source_year, 2026);
    }
}
