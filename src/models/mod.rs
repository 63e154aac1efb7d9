//! Core data models for the leave planner.
//!
//! This module contains all the domain models used throughout the engine.

mod day_record;
mod entitlement;
mod holiday;
mod leave_range;
mod plan;
mod scope;

pub use day_record::{DayRecord, DayStatus};
pub use entitlement::{CurrentYearAllowance, LeaveEntitlement};
pub use holiday::PublicHoliday;
pub use leave_range::LeaveRange;
pub use plan::{AuditStep, AuditTrace, AuditWarning, LeavePlan, LeaveSummary, YearlyBalance};
pub use scope::DisplayScope;
