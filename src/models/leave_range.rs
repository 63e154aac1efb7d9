//! Planned leave range model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::expand_range;
use crate::error::{EngineError, EngineResult};

/// A planned-leave interval, inclusive of both ends.
///
/// Fields are public so ranges can be deserialized as-is; validation happens
/// in [`LeaveRange::new`] and again whenever a range is expanded, so a
/// reversed range can never reach the ledger.
///
/// # Example
///
/// ```
/// use leave_planner::models::LeaveRange;
/// use chrono::NaiveDate;
///
/// let range = LeaveRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(range.expand().unwrap().len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaveRange {
    /// The first day of leave.
    pub start_date: NaiveDate,
    /// The last day of leave.
    pub end_date: NaiveDate,
}

impl LeaveRange {
    /// Creates a validated leave range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] if `start_date` is after `end_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if start_date > end_date {
            return Err(EngineError::InvalidRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// A one-day leave range.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start_date: date,
            end_date: date,
        }
    }

    /// Expands the range into every date it covers.
    pub fn expand(&self) -> EngineResult<Vec<NaiveDate>> {
        expand_range(self.start_date, self.end_date)
    }

    /// Returns true if `date` falls within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
