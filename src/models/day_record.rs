//! Per-day classification records.
//!
//! This module contains [`DayRecord`], the ledger entry for one calendar
//! date, and [`DayStatus`], the single display category derived from it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The display category of a calendar day.
///
/// Precedence, highest first: holiday+leave, public holiday, planned leave,
/// working day, non-working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// A public holiday that the person also marked as leave.
    HolidayAndLeave,
    /// A public holiday.
    PublicHoliday,
    /// Planned leave that is not a public holiday.
    PlannedLeave,
    /// An ordinary working day.
    WorkingDay,
    /// A weekday the mask marks as non-working.
    NonWorkingDay,
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::HolidayAndLeave => write!(f, "Public holiday + Leave"),
            DayStatus::PublicHoliday => write!(f, "Public holiday"),
            DayStatus::PlannedLeave => write!(f, "Planned leave"),
            DayStatus::WorkingDay => write!(f, "Working day"),
            DayStatus::NonWorkingDay => write!(f, "Non-working day"),
        }
    }
}

/// Classification of one calendar date.
///
/// Records are produced once by the ledger builder and only read afterwards.
///
/// # Example
///
/// ```
/// use leave_planner::models::{DayRecord, DayStatus};
/// use chrono::NaiveDate;
///
/// let record = DayRecord {
///     date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     is_public_holiday: true,
///     is_planned_leave: true,
///     is_working_day_of_week: true,
/// };
///
/// assert_eq!(record.status(), DayStatus::HolidayAndLeave);
/// assert!(!record.consumes_leave());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayRecord {
    /// The calendar date.
    pub date: NaiveDate,
    /// Whether the date is in the public holiday set.
    pub is_public_holiday: bool,
    /// Whether the date is covered by any planned leave range.
    pub is_planned_leave: bool,
    /// Whether the weekly mask marks this weekday as working.
    pub is_working_day_of_week: bool,
}

impl DayRecord {
    /// The single display category for this day.
    pub fn status(&self) -> DayStatus {
        match (self.is_public_holiday, self.is_planned_leave) {
            (true, true) => DayStatus::HolidayAndLeave,
            (true, false) => DayStatus::PublicHoliday,
            (false, true) => DayStatus::PlannedLeave,
            (false, false) if self.is_working_day_of_week => DayStatus::WorkingDay,
            (false, false) => DayStatus::NonWorkingDay,
        }
    }

    /// Returns true if this day is charged against the leave balance.
    ///
    /// Only planned leave on a working weekday that is not a public holiday
    /// is charged. Public holidays are never charged, even when also marked
    /// as leave.
    pub fn consumes_leave(&self) -> bool {
        self.is_planned_leave && self.is_working_day_of_week && !self.is_public_holiday
    }

    /// The calendar year of the date.
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(holiday: bool, leave: bool, working: bool) -> DayRecord {
        DayRecord {
            date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
            is_public_holiday: holiday,
            is_planned_leave: leave,
            is_working_day_of_week: working,
        }
    }

    #[test]
    fn test_status_precedence() {
        assert_eq!(record(true, true, true).status(), DayStatus::HolidayAndLeave);
        assert_eq!(record(true, true, false).status(), DayStatus::HolidayAndLeave);
        assert_eq!(record(true, false, true).status(), DayStatus::PublicHoliday);
        assert_eq!(record(false, true, true).status(), DayStatus::PlannedLeave);
        assert_eq!(record(false, true, false).status(), DayStatus::PlannedLeave);
        assert_eq!(record(false, false, true).status(), DayStatus::WorkingDay);
        assert_eq!(record(false, false, false).status(), DayStatus::NonWorkingDay);
    }

    #[test]
    fn test_only_leave_on_working_non_holiday_consumes() {
        assert!(record(false, true, true).consumes_leave());

        assert!(!record(true, true, true).consumes_leave());
        assert!(!record(false, true, false).consumes_leave());
        assert!(!record(false, false, true).consumes_leave());
        assert!(!record(true, false, true).consumes_leave());
    }

    #[test]
    fn test_serialize_status() {
        let json = serde_json::to_string(&DayStatus::HolidayAndLeave).unwrap();
        assert_eq!(json, "\"holiday_and_leave\"");
    }
}
