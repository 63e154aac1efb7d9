//! Date range expansion.
//!
//! This module turns inclusive `(start, end)` date pairs into ordered
//! sequences of individual calendar days, and provides [`DateSpan`] for
//! describing the window a ledger is built over.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Expands an inclusive date range into every day it covers.
///
/// Calendar arithmetic is done by chrono, so ranges crossing a year boundary
/// or a leap day need no special handling. The function is pure: the same
/// input always yields the same output.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] if `start` is after `end`.
///
/// # Example
///
/// ```
/// use leave_planner::calculation::expand_range;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2027, 12, 30).unwrap();
/// let end = NaiveDate::from_ymd_opt(2028, 1, 2).unwrap();
///
/// let days = expand_range(start, end).unwrap();
/// assert_eq!(days.len(), 4);
/// assert_eq!(days[0], start);
/// assert_eq!(days[3], end);
/// ```
pub fn expand_range(start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<NaiveDate>> {
    if start > end {
        return Err(EngineError::InvalidRange { start, end });
    }

    Ok(start.iter_days().take_while(|day| *day <= end).collect())
}

/// An inclusive, validated window of calendar days.
///
/// # Example
///
/// ```
/// use leave_planner::calculation::DateSpan;
/// use chrono::NaiveDate;
///
/// let span = DateSpan::for_years(2026, 2027).unwrap();
/// assert_eq!(span.start(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
/// assert_eq!(span.end(), NaiveDate::from_ymd_opt(2027, 12, 31).unwrap());
/// assert_eq!(span.len(), 730);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateSpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateSpan {
    /// Creates a span from `start` to `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a span covering whole calendar years, 1 January of
    /// `first_year` through 31 December of `last_year`.
    pub fn for_years(first_year: i32, last_year: i32) -> EngineResult<Self> {
        let start = NaiveDate::from_ymd_opt(first_year, 1, 1)
            .ok_or(EngineError::YearOutOfRange { year: first_year })?;
        let end = NaiveDate::from_ymd_opt(last_year, 12, 31)
            .ok_or(EngineError::YearOutOfRange { year: last_year })?;
        Self::new(start, end)
    }

    /// The first day of the span.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last day of the span.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` falls within the span (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// The number of days in the span.
    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// A span always holds at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates every day of the span in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(|day| *day <= self.end)
    }

    /// The calendar years touched by the span, in order.
    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.start.year()..=self.end.year()
    }
}
