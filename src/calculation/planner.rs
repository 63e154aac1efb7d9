//! Leave planning orchestration.
//!
//! [`LeavePlanner`] runs the full pipeline for one person: expand leave,
//! build the day ledger over the displayed years, then account for
//! entitlement. Settings are fixed at construction and never mutated.

use std::collections::BTreeSet;
use std::time::Instant;

use chrono::{Datelike, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{DateSpan, DayLedger, WeeklyMask, compute_summary};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CurrentYearAllowance, DisplayScope, LeaveEntitlement,
    LeavePlan, LeaveRange, PublicHoliday,
};

/// Default number of years before `Y` and after `Y+1` that leave and
/// holiday dates may fall in.
pub const DEFAULT_YEAR_WINDOW: u32 = 10;

/// Immutable engine settings for a planning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerSettings {
    /// Which weekdays are working days.
    pub mask: WeeklyMask,
    /// Which years to display and report.
    pub scope: DisplayScope,
    /// The current year `Y`.
    pub current_year: i32,
    /// The current-year entitlement basis.
    pub current_year_allowance: CurrentYearAllowance,
    /// Years before `Y` and after `Y+1` that inputs may reach into.
    pub year_window: u32,
}

impl PlannerSettings {
    /// Settings with a standard week, both years in scope, and the
    /// carry-over basis for the current year.
    pub fn for_year(current_year: i32) -> Self {
        Self {
            mask: WeeklyMask::default(),
            scope: DisplayScope::Both,
            current_year,
            current_year_allowance: CurrentYearAllowance::default(),
            year_window: DEFAULT_YEAR_WINDOW,
        }
    }

    /// The first and last year that leave and holiday dates may fall in.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::YearOutOfRange`] if `current_year` has no
    /// following year.
    pub fn permitted_years(&self) -> EngineResult<(i32, i32)> {
        let next_year = self
            .current_year
            .checked_add(1)
            .ok_or(EngineError::YearOutOfRange {
                year: self.current_year,
            })?;
        let window = i32::try_from(self.year_window).unwrap_or(i32::MAX);
        Ok((
            self.current_year.saturating_sub(window),
            next_year.saturating_add(window),
        ))
    }
}

/// Everything a planning run reads, already parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerInputs {
    /// Public holidays from every loaded source.
    pub public_holidays: Vec<PublicHoliday>,
    /// Planned leave ranges.
    pub leave_ranges: Vec<LeaveRange>,
    /// The person's entitlement.
    pub entitlement: LeaveEntitlement,
}

/// Computes leave plans.
///
/// # Example
///
/// ```
/// use leave_planner::calculation::{LeavePlanner, PlannerInputs, PlannerSettings};
/// use leave_planner::models::{LeaveEntitlement, LeaveRange, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
///
/// let planner = LeavePlanner::new(PlannerSettings::for_year(2026));
/// let plan = planner
///     .plan(&PlannerInputs {
///         public_holidays: vec![PublicHoliday::new(day(1))],
///         leave_ranges: vec![LeaveRange::new(day(1), day(5)).unwrap()],
///         entitlement: LeaveEntitlement::new(18, 9, 1, 18),
///     })
///     .unwrap();
///
/// assert_eq!(plan.summary.annual_leave_used, 2);
/// assert_eq!(plan.summary.balance_for(2026).unwrap().days_left, 7);
/// assert_eq!(plan.summary.balance_for(2027).unwrap().days_left, 28);
/// ```
#[derive(Debug, Clone)]
pub struct LeavePlanner {
    settings: PlannerSettings,
}

impl LeavePlanner {
    /// Creates a planner with fixed settings.
    pub fn new(settings: PlannerSettings) -> Self {
        Self { settings }
    }

    /// The settings this planner runs with.
    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Runs the pipeline over `inputs`.
    ///
    /// # Errors
    ///
    /// Fails on the first reversed leave range, on a leave range that
    /// reaches outside [`PlannerSettings::permitted_years`], or when the
    /// current year has no calendar span. No partial plan is returned.
    pub fn plan(&self, inputs: &PlannerInputs) -> EngineResult<LeavePlan> {
        let start_time = Instant::now();
        let settings = &self.settings;

        let years = settings.scope.years(settings.current_year)?;
        let (first_year, last_year) = match (years.first(), years.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => (settings.current_year, settings.current_year),
        };
        let span = DateSpan::for_years(first_year, last_year)?;

        let (window_start, window_end) = settings.permitted_years()?;
        let permitted = |year: i32| (window_start..=window_end).contains(&year);
        for range in &inputs.leave_ranges {
            if !permitted(range.start_date.year()) || !permitted(range.end_date.year()) {
                return Err(EngineError::RangeOutsideWindow {
                    start: range.start_date,
                    end: range.end_date,
                    first_year: window_start,
                    last_year: window_end,
                });
            }
        }

        let public_holidays: Vec<PublicHoliday> = inputs
            .public_holidays
            .iter()
            .filter(|holiday| permitted(holiday.date.year()))
            .copied()
            .collect();
        let dropped_holidays = inputs.public_holidays.len() - public_holidays.len();
        if dropped_holidays > 0 {
            warn!(
                dropped = dropped_holidays,
                first_year = window_start,
                last_year = window_end,
                "Ignoring public holidays outside the permitted years"
            );
        }

        let ledger = DayLedger::build(
            &public_holidays,
            &inputs.leave_ranges,
            &settings.mask,
            Some(span),
        )?;

        let holiday_years: BTreeSet<i32> = public_holidays
            .iter()
            .map(|holiday| holiday.source_year)
            .collect();

        let mut audit_steps = vec![AuditStep {
            step_number: 1,
            rule_id: "day_ledger".to_string(),
            rule_name: "Day Ledger".to_string(),
            input: serde_json::json!({
                "public_holidays": public_holidays.len(),
                "leave_ranges": inputs.leave_ranges.len(),
                "working_days": settings.mask.to_string(),
                "span_start": span.start(),
                "span_end": span.end(),
            }),
            output: serde_json::json!({
                "records": ledger.len(),
                "public_holiday_days": ledger.records().iter().filter(|r| r.is_public_holiday).count(),
                "planned_leave_days": ledger.records().iter().filter(|r| r.is_planned_leave).count(),
            }),
            reasoning: format!(
                "Classified {} day(s) from {} to {} plus any holiday or leave dates outside it",
                ledger.len(),
                span.start(),
                span.end()
            ),
        }];

        let mut warnings: Vec<AuditWarning> = years
            .iter()
            .filter(|year| !holiday_years.contains(year))
            .map(|year| AuditWarning {
                code: "NO_HOLIDAY_DATA".to_string(),
                message: format!(
                    "No public holiday data loaded for {}; only weekends are excluded",
                    year
                ),
                severity: "low".to_string(),
            })
            .collect();
        if dropped_holidays > 0 {
            warnings.push(AuditWarning {
                code: "HOLIDAYS_IGNORED".to_string(),
                message: format!(
                    "{} public holiday(s) outside {} to {} were ignored",
                    dropped_holidays, window_start, window_end
                ),
                severity: "low".to_string(),
            });
        }

        let accounting = compute_summary(
            &ledger,
            &inputs.entitlement,
            settings.current_year,
            settings.scope,
            settings.current_year_allowance,
            2,
        )?;
        audit_steps.extend(accounting.audit_steps);
        warnings.extend(accounting.warnings);

        debug!(
            years = ?years,
            holiday_years = ?holiday_years,
            warnings = warnings.len(),
            "Accounted leave"
        );

        let duration_us = start_time.elapsed().as_micros() as u64;
        info!(
            current_year = settings.current_year,
            scope = %settings.scope,
            annual_leave_used = accounting.summary.annual_leave_used,
            duration_us,
            "Leave plan computed"
        );

        Ok(LeavePlan {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            years,
            holiday_years: holiday_years.into_iter().collect(),
            ledger,
            summary: accounting.summary,
            audit_trace: AuditTrace {
                steps: audit_steps,
                warnings,
                duration_us,
            },
        })
    }
}
