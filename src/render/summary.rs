//! Plain-text summary lines.

use crate::models::LeavePlan;

/// The summary as plain-text lines: leave used, leave left per displayed
/// year, and burned carry-over.
///
/// # Example
///
/// ```
/// use leave_planner::calculation::{LeavePlanner, PlannerInputs, PlannerSettings};
/// use leave_planner::models::{DisplayScope, LeaveEntitlement};
/// use leave_planner::render::summary_lines;
///
/// let settings = PlannerSettings {
///     scope: DisplayScope::Next,
///     ..PlannerSettings::for_year(2026)
/// };
/// let inputs = PlannerInputs {
///     entitlement: LeaveEntitlement::new(18, 9, 1, 18),
///     ..PlannerInputs::default()
/// };
/// let plan = LeavePlanner::new(settings).plan(&inputs).unwrap();
///
/// assert_eq!(
///     summary_lines(&plan),
///     vec![
///         "Annual leave used: 0 day(s)",
///         "Annual leave left (2027): 28 day(s)",
///         "Burned leave (exceeds carry-over cap): 0 day(s)",
///     ]
/// );
/// ```
pub fn summary_lines(plan: &LeavePlan) -> Vec<String> {
    let summary = &plan.summary;
    let mut lines = vec![format!(
        "Annual leave used: {} day(s)",
        summary.annual_leave_used
    )];
    lines.extend(summary.balances.iter().map(|balance| {
        format!(
            "Annual leave left ({}): {} day(s)",
            balance.year, balance.days_left
        )
    }));
    lines.push(format!(
        "Burned leave (exceeds carry-over cap): {} day(s)",
        summary.burned_leave
    ));
    lines
}
