//! Calculation logic for the leave planner.
//!
//! This module contains the leave accounting and calendar composition
//! engine: date range expansion, the weekly working-day mask, the day
//! ledger builder, entitlement accounting, and the planner that runs them
//! in order.

mod date_range;
mod day_ledger;
mod entitlement;
mod planner;
mod weekly_mask;

pub use date_range::{DateSpan, expand_range};
pub use day_ledger::{DayLedger, holiday_dates, leave_dates};
pub use entitlement::{
    AccountingResult, balance_for, compute_summary, days_used_by_year, entitlement_for,
};
pub use planner::{DEFAULT_YEAR_WINDOW, LeavePlanner, PlannerInputs, PlannerSettings};
pub use weekly_mask::{DEFAULT_WORKING_DAYS, NON_WORKING_SYMBOL, WORKING_SYMBOL, WeeklyMask};
