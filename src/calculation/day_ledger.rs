//! Day ledger construction.
//!
//! This module merges public-holiday dates and expanded planned-leave dates
//! into a single ordered ledger of [`DayRecord`]s, classifying each date
//! against the [`WeeklyMask`].

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{DateSpan, WeeklyMask};
use crate::error::EngineResult;
use crate::models::{DayRecord, LeaveRange, PublicHoliday};

/// An ordered, duplicate-free mapping from date to [`DayRecord`].
///
/// The ledger holds one record for every date in the display span plus
/// every public holiday and planned-leave date, even those outside the span.
///
/// # Example
///
/// ```
/// use leave_planner::calculation::{DayLedger, WeeklyMask};
/// use leave_planner::models::{DayStatus, LeaveRange, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
///
/// let ledger = DayLedger::build(
///     &[PublicHoliday::new(day(1))],
///     &[LeaveRange::new(day(1), day(5)).unwrap()],
///     &WeeklyMask::default(),
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(ledger.len(), 5);
/// assert_eq!(ledger.get(day(1)).unwrap().status(), DayStatus::HolidayAndLeave);
/// assert_eq!(ledger.days_used(2026), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<DayRecord>", into = "Vec<DayRecord>")]
pub struct DayLedger {
    records: Vec<DayRecord>,
}

impl DayLedger {
    /// Builds the ledger.
    ///
    /// Holiday dates from all sources collapse into one set, and leave dates
    /// covered by several overlapping ranges count once. When `span` is
    /// `None` the span runs from the earliest to the latest known date.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidRange`] if any leave range
    /// is reversed. No partial ledger is produced.
    pub fn build(
        holidays: &[PublicHoliday],
        leave_ranges: &[LeaveRange],
        mask: &WeeklyMask,
        span: Option<DateSpan>,
    ) -> EngineResult<Self> {
        let holiday_dates = holiday_dates(holidays);
        let leave_dates = leave_dates(leave_ranges)?;

        let mut dates: BTreeSet<NaiveDate> = holiday_dates.union(&leave_dates).copied().collect();
        let span = match span {
            Some(span) => Some(span),
            None => match (dates.first(), dates.last()) {
                (Some(&first), Some(&last)) => Some(DateSpan::new(first, last)?),
                _ => None,
            },
        };
        if let Some(span) = span {
            dates.extend(span.days());
        }

        let records: Vec<DayRecord> = dates
            .into_iter()
            .map(|date| DayRecord {
                date,
                is_public_holiday: holiday_dates.contains(&date),
                is_planned_leave: leave_dates.contains(&date),
                is_working_day_of_week: mask.is_working_weekday(date),
            })
            .collect();

        debug!(
            holidays = holiday_dates.len(),
            leave_days = leave_dates.len(),
            records = records.len(),
            "Built day ledger"
        );

        Ok(Self { records })
    }

    /// All records in date order.
    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    /// Looks up the record for `date`.
    pub fn get(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.records
            .binary_search_by_key(&date, |record| record.date)
            .ok()
            .map(|index| &self.records[index])
    }

    /// Records falling in calendar year `year`.
    pub fn records_in_year(&self, year: i32) -> impl Iterator<Item = &DayRecord> {
        self.records.iter().filter(move |record| record.date.year() == year)
    }

    /// Records that are charged against the leave balance.
    pub fn leave_consuming(&self) -> impl Iterator<Item = &DayRecord> {
        self.records.iter().filter(|record| record.consumes_leave())
    }

    /// Number of charged leave days in `year`.
    pub fn days_used(&self, year: i32) -> u32 {
        self.leave_consuming()
            .filter(|record| record.date.year() == year)
            .count() as u32
    }

    /// The first and last dates held by the ledger.
    pub fn span(&self) -> Option<DateSpan> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => DateSpan::new(first.date, last.date).ok(),
            _ => None,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The set of public-holiday dates across all sources.
pub fn holiday_dates(holidays: &[PublicHoliday]) -> BTreeSet<NaiveDate> {
    holidays.iter().map(|holiday| holiday.date).collect()
}

/// The set of dates covered by any leave range.
pub fn leave_dates(leave_ranges: &[LeaveRange]) -> EngineResult<BTreeSet<NaiveDate>> {
    let mut dates = BTreeSet::new();
    for range in leave_ranges {
        dates.extend(range.expand()?);
    }
    Ok(dates)
}

impl From<Vec<DayRecord>> for DayLedger {
    fn from(mut records: Vec<DayRecord>) -> Self {
        records.sort_by_key(|record| record.date);
        records.dedup_by_key(|record| record.date);
        Self { records }
    }
}

impl From<DayLedger> for Vec<DayRecord> {
    fn from(ledger: DayLedger) -> Self {
        ledger.records
    }
}
