//! Leave plan result models.
//!
//! This module contains the [`LeavePlan`] type and its associated structures
//! that capture all outputs of a planning run: the day ledger, per-year
//! balances, and an audit trace of the accounting decisions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CurrentYearAllowance, DisplayScope};
use crate::calculation::DayLedger;

/// Computed leave balance for one year.
///
/// `days_left` may be negative when more leave is planned than the year's
/// entitlement allows.
///
/// # Example
///
/// ```
/// use leave_planner::models::YearlyBalance;
///
/// let balance = YearlyBalance {
///     year: 2027,
///     entitlement: 28,
///     days_used: 30,
///     days_left: -2,
/// };
/// assert!(balance.is_overdrawn());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyBalance {
    /// The calendar year.
    pub year: i32,
    /// The effective entitlement for the year.
    pub entitlement: i64,
    /// Leave days charged in the year.
    pub days_used: u32,
    /// `entitlement - days_used`.
    pub days_left: i64,
}

impl YearlyBalance {
    /// Returns true if more days were used than the year allows.
    pub fn is_overdrawn(&self) -> bool {
        self.days_left < 0
    }
}

/// Aggregated leave accounting for the years in scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSummary {
    /// The current year `Y`.
    pub current_year: i32,
    /// The reported scope.
    pub scope: DisplayScope,
    /// The basis used for the current year's entitlement.
    pub current_year_allowance: CurrentYearAllowance,
    /// Sum of `days_used` over the years in scope.
    pub annual_leave_used: u32,
    /// Carry-over after applying the cap.
    pub effective_carry_over: u32,
    /// Carry-over above the cap that is still forfeited after the current
    /// year's leave.
    pub burned_leave: u32,
    /// One balance per year in scope, ascending.
    pub balances: Vec<YearlyBalance>,
}

impl LeaveSummary {
    /// Looks up the balance for `year`, if it is in scope.
    pub fn balance_for(&self, year: i32) -> Option<&YearlyBalance> {
        self.balances.iter().find(|balance| balance.year == year)
    }
}

/// A single step in the audit trace recording an accounting decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during planning.
///
/// Warnings flag conditions that do not stop the run but deserve attention,
/// such as forfeited carry-over or an overdrawn year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a planning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of accounting steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during the run.
    pub warnings: Vec<AuditWarning>,
    /// The total run duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a planning run.
///
/// The envelope (`calculation_id`, `timestamp`, `duration_us`) differs per
/// run; the ledger and summary are fully determined by the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePlan {
    /// Unique identifier for this run.
    pub calculation_id: Uuid,
    /// When the plan was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that computed the plan.
    pub engine_version: String,
    /// The years displayed and reported, ascending.
    pub years: Vec<i32>,
    /// Years for which holiday data was loaded.
    pub holiday_years: Vec<i32>,
    /// Per-day classification for the displayed years and every holiday and
    /// leave date.
    pub ledger: DayLedger,
    /// Leave accounting for the years in scope.
    pub summary: LeaveSummary,
    /// Audit trace of the accounting decisions.
    pub audit_trace: AuditTrace,
}
