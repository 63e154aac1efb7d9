//! Entitlement accounting.
//!
//! This module counts leave days charged per year from a [`DayLedger`] and
//! derives each year's balance from a [`LeaveEntitlement`]:
//!
//! - current year `Y`: the carry-over in, or the misc allowance, depending on
//!   [`CurrentYearAllowance`]
//! - next year `Y+1`: base package + capped carry-over + misc allowance
//!
//! Balances may go negative. Carry-over above the cap is clamped, never an
//! error.

use std::collections::BTreeMap;

use chrono::Datelike;
use tracing::warn;

use super::DayLedger;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditWarning, CurrentYearAllowance, DisplayScope, LeaveEntitlement, LeaveSummary,
    YearlyBalance,
};

/// The result of leave accounting, including the summary and audit records.
#[derive(Debug, Clone)]
pub struct AccountingResult {
    /// Balances and totals for the years in scope.
    pub summary: LeaveSummary,
    /// The audit steps recording each rule application.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings raised while accounting.
    pub warnings: Vec<AuditWarning>,
}

/// Counts charged leave days per calendar year.
///
/// Years with no charged days are absent from the map.
pub fn days_used_by_year(ledger: &DayLedger) -> BTreeMap<i32, u32> {
    let mut used = BTreeMap::new();
    for record in ledger.leave_consuming() {
        *used.entry(record.date.year()).or_insert(0) += 1;
    }
    used
}

/// The effective entitlement for `year`.
///
/// Only the current year and the year after carry an entitlement; any other
/// year has none.
///
/// # Example
///
/// ```
/// use leave_planner::calculation::entitlement_for;
/// use leave_planner::models::{CurrentYearAllowance, LeaveEntitlement};
///
/// let entitlement = LeaveEntitlement::new(18, 9, 1, 18);
///
/// assert_eq!(entitlement_for(&entitlement, 2026, 2026, CurrentYearAllowance::CarryOverIn), 9);
/// assert_eq!(entitlement_for(&entitlement, 2026, 2026, CurrentYearAllowance::MiscAllowance), 1);
/// assert_eq!(entitlement_for(&entitlement, 2027, 2026, CurrentYearAllowance::CarryOverIn), 28);
/// ```
pub fn entitlement_for(
    entitlement: &LeaveEntitlement,
    year: i32,
    current_year: i32,
    allowance: CurrentYearAllowance,
) -> i64 {
    if year == current_year {
        match allowance {
            CurrentYearAllowance::CarryOverIn => i64::from(entitlement.carry_over_in),
            CurrentYearAllowance::MiscAllowance => i64::from(entitlement.misc_allowance),
        }
    } else if current_year.checked_add(1) == Some(year) {
        i64::from(entitlement.base_package)
            + i64::from(entitlement.effective_carry_over())
            + i64::from(entitlement.misc_allowance)
    } else {
        0
    }
}

/// Computes the balance for a single year.
pub fn balance_for(
    ledger: &DayLedger,
    entitlement: &LeaveEntitlement,
    year: i32,
    current_year: i32,
    allowance: CurrentYearAllowance,
) -> YearlyBalance {
    let year_entitlement = entitlement_for(entitlement, year, current_year, allowance);
    let days_used = ledger.days_used(year);
    YearlyBalance {
        year,
        entitlement: year_entitlement,
        days_used,
        days_left: year_entitlement - i64::from(days_used),
    }
}

/// Computes the leave summary for the years in `scope`.
///
/// Burned leave is the carry-over above the cap, reduced by leave used in
/// the current year (using leave this year means less to carry), floored
/// at zero.
///
/// # Arguments
///
/// * `ledger` - The day ledger to count leave from
/// * `entitlement` - The person's entitlement
/// * `current_year` - The year `Y`
/// * `scope` - Which years to report
/// * `allowance` - The current-year entitlement basis
/// * `step_number` - The first step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`EngineError::YearOutOfRange`](crate::error::EngineError::YearOutOfRange)
/// if `current_year` has no following year.
pub fn compute_summary(
    ledger: &DayLedger,
    entitlement: &LeaveEntitlement,
    current_year: i32,
    scope: DisplayScope,
    allowance: CurrentYearAllowance,
    step_number: u32,
) -> EngineResult<AccountingResult> {
    let years = scope.years(current_year)?;
    let mut audit_steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number = step_number;

    let used_by_year = days_used_by_year(ledger);
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "leave_consumption".to_string(),
        rule_name: "Leave Consumption".to_string(),
        input: serde_json::json!({
            "planned_leave_days": ledger.records().iter().filter(|r| r.is_planned_leave).count(),
        }),
        output: serde_json::json!({ "days_used_by_year": used_by_year }),
        reasoning: "Leave is charged only on working weekdays that are not public holidays"
            .to_string(),
    });
    step_number += 1;

    let effective_carry_over = entitlement.effective_carry_over();
    let excess = entitlement.excess_carry_over();
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "carry_over_cap".to_string(),
        rule_name: "Carry-over Cap".to_string(),
        input: serde_json::json!({
            "carry_over_in": entitlement.carry_over_in,
            "max_carry_over": entitlement.max_carry_over,
        }),
        output: serde_json::json!({
            "effective_carry_over": effective_carry_over,
            "excess": excess,
        }),
        reasoning: if excess > 0 {
            format!(
                "Carry-over {} exceeds cap {}; {} day(s) clamped",
                entitlement.carry_over_in, entitlement.max_carry_over, excess
            )
        } else {
            format!(
                "Carry-over {} is within cap {}",
                entitlement.carry_over_in, entitlement.max_carry_over
            )
        },
    });
    step_number += 1;

    if excess > 0 {
        warn!(
            carry_over_in = entitlement.carry_over_in,
            max_carry_over = entitlement.max_carry_over,
            "Carry-over exceeds cap"
        );
        warnings.push(AuditWarning {
            code: "CARRY_OVER_CLAMPED".to_string(),
            message: format!(
                "Declared carry-over of {} day(s) exceeds the cap of {}; {} day(s) will not carry",
                entitlement.carry_over_in, entitlement.max_carry_over, excess
            ),
            severity: "medium".to_string(),
        });
    }

    let mut balances = Vec::new();
    for year in years {
        let balance = balance_for(ledger, entitlement, year, current_year, allowance);

        let basis = if year == current_year {
            match allowance {
                CurrentYearAllowance::CarryOverIn => "carry-over in",
                CurrentYearAllowance::MiscAllowance => "misc allowance",
            }
        } else {
            "base package + capped carry-over + misc allowance"
        };
        audit_steps.push(AuditStep {
            step_number,
            rule_id: "yearly_balance".to_string(),
            rule_name: "Yearly Balance".to_string(),
            input: serde_json::json!({
                "year": year,
                "basis": basis,
                "days_used": balance.days_used,
            }),
            output: serde_json::json!({
                "entitlement": balance.entitlement,
                "days_left": balance.days_left,
            }),
            reasoning: format!(
                "{}: {} ({}) - {} used = {} left",
                year, balance.entitlement, basis, balance.days_used, balance.days_left
            ),
        });
        step_number += 1;

        if balance.is_overdrawn() {
            warn!(year, days_left = balance.days_left, "Leave overdrawn");
            warnings.push(AuditWarning {
                code: "LEAVE_OVERDRAWN".to_string(),
                message: format!(
                    "{} day(s) of leave planned in {} beyond an entitlement of {}",
                    -balance.days_left, year, balance.entitlement
                ),
                severity: "high".to_string(),
            });
        }

        balances.push(balance);
    }

    let used_this_year = used_by_year.get(&current_year).copied().unwrap_or(0);
    let burned_leave = excess.saturating_sub(used_this_year);
    let annual_leave_used = balances.iter().map(|balance| balance.days_used).sum();

    Ok(AccountingResult {
        summary: LeaveSummary {
            current_year,
            scope,
            current_year_allowance: allowance,
            annual_leave_used,
            effective_carry_over,
            burned_leave,
            balances,
        },
        audit_steps,
        warnings,
    })
}
