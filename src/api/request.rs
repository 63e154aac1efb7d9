//! Request types for the leave planner API.
//!
//! This module defines the JSON request structure shared by the `/plan` and
//! `/plan/html` endpoints.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calculation::{PlannerInputs, PlannerSettings, WeeklyMask};
use crate::config::PlannerConfig;
use crate::error::EngineResult;
use crate::models::{CurrentYearAllowance, DisplayScope, LeaveEntitlement, LeaveRange, PublicHoliday};

/// Request body for the planning endpoints.
///
/// Optional settings fall back to the server's configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Public holidays from every source.
    #[serde(default)]
    pub public_holidays: Vec<PublicHolidayRequest>,
    /// Planned leave ranges.
    #[serde(default)]
    pub leave_ranges: Vec<LeaveRangeRequest>,
    /// The person's entitlement.
    pub entitlement: EntitlementRequest,
    /// Seven `0`/`1` characters, Monday first.
    #[serde(default)]
    pub working_days: Option<String>,
    /// Which years to display and report.
    #[serde(default)]
    pub show_years: Option<DisplayScope>,
    /// The current year `Y`.
    #[serde(default)]
    pub current_year: Option<i32>,
    /// The current-year entitlement basis.
    #[serde(default)]
    pub current_year_allowance: Option<CurrentYearAllowance>,
    /// Page title for `/plan/html`.
    #[serde(default)]
    pub title: Option<String>,
}

/// A public holiday in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicHolidayRequest {
    /// The holiday date.
    pub date: NaiveDate,
    /// The year of the calendar the date came from; the date's own year
    /// when absent.
    #[serde(default)]
    pub source_year: Option<i32>,
}

/// A planned leave range in a request. The range is validated when the
/// plan is computed, not on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRangeRequest {
    /// The first day of leave.
    pub start_date: NaiveDate,
    /// The last day of leave.
    pub end_date: NaiveDate,
}

/// Entitlement figures in a request.
///
/// Signed on the wire so a negative value reports which field was wrong
/// instead of a generic deserialization error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntitlementRequest {
    /// The annual package.
    pub base_package: i64,
    /// Days carried into the current year.
    pub carry_over_in: i64,
    /// Miscellaneous leave.
    #[serde(default)]
    pub misc_allowance: i64,
    /// The carry-over cap.
    pub max_carry_over: i64,
}

impl From<PublicHolidayRequest> for PublicHoliday {
    fn from(req: PublicHolidayRequest) -> Self {
        PublicHoliday {
            date: req.date,
            source_year: req.source_year.unwrap_or_else(|| req.date.year()),
        }
    }
}

impl From<LeaveRangeRequest> for LeaveRange {
    fn from(req: LeaveRangeRequest) -> Self {
        LeaveRange {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl TryFrom<EntitlementRequest> for LeaveEntitlement {
    type Error = crate::error::EngineError;

    fn try_from(req: EntitlementRequest) -> Result<Self, Self::Error> {
        LeaveEntitlement::from_signed(
            req.base_package,
            req.carry_over_in,
            req.misc_allowance,
            req.max_carry_over,
        )
    }
}

impl PlanRequest {
    /// Splits the request into engine settings and inputs, filling unset
    /// settings from `defaults`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidMask`] for a malformed
    /// mask and [`crate::error::EngineError::InvalidEntitlement`] for a
    /// negative entitlement field.
    pub fn into_parts(
        self,
        defaults: &PlannerConfig,
    ) -> EngineResult<(PlannerSettings, PlannerInputs)> {
        let mask = WeeklyMask::parse(
            self.working_days
                .as_deref()
                .unwrap_or(&defaults.working_days),
        )?;
        let settings = PlannerSettings {
            mask,
            scope: self.show_years.unwrap_or(defaults.show_years),
            current_year: self
                .current_year
                .unwrap_or_else(|| defaults.resolved_current_year()),
            current_year_allowance: self
                .current_year_allowance
                .unwrap_or(defaults.current_year_allowance),
            year_window: defaults.year_window,
        };

        let inputs = PlannerInputs {
            public_holidays: self.public_holidays.into_iter().map(Into::into).collect(),
            leave_ranges: self.leave_ranges.into_iter().map(Into::into).collect(),
            entitlement: self.entitlement.try_into()?,
        };

        Ok((settings, inputs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn sample_json() -> &'static str {
        r#"{
            "public_holidays": [
                {"date": "2026-01-01"},
                {"date": "2027-01-01", "source_year": 2027}
            ],
            "leave_ranges": [
                {"start_date": "2026-01-01", "end_date": "2026-01-05"}
            ],
            "entitlement": {
                "base_package": 18,
                "carry_over_in": 9,
                "misc_allowance": 1,
                "max_carry_over": 18
            },
            "current_year": 2026
        }"#
    }

    #[test]
    fn test_deserialize_plan_request() {
        let request: PlanRequest = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(request.public_holidays.len(), 2);
        assert_eq!(request.leave_ranges.len(), 1);
        assert_eq!(request.entitlement.base_package, 18);
        assert_eq!(request.current_year, Some(2026));
        assert!(request.working_days.is_none());
    }

    #[test]
    fn test_into_parts_uses_config_defaults() {
        let request: PlanRequest = serde_json::from_str(sample_json()).unwrap();
        let defaults = PlannerConfig {
            working_days: "1111110".to_string(),
            show_years: DisplayScope::Current,
            year_window: 4,
            ..PlannerConfig::default()
        };
        let (settings, inputs) = request.into_parts(&defaults).unwrap();

        assert_eq!(settings.mask.to_string(), "1111110");
        assert_eq!(settings.scope, DisplayScope::Current);
        assert_eq!(settings.current_year, 2026);
        assert_eq!(settings.year_window, 4);
        assert_eq!(inputs.public_holidays[0].source_year, 2026);
        assert_eq!(inputs.entitlement, LeaveEntitlement::new(18, 9, 1, 18));
    }

    #[test]
    fn test_request_settings_override_defaults() {
        let mut request: PlanRequest = serde_json::from_str(sample_json()).unwrap();
        request.working_days = Some("0111110".to_string());
        request.show_years = Some(DisplayScope::Next);
        request.current_year_allowance = Some(CurrentYearAllowance::MiscAllowance);

        let (settings, _) = request.into_parts(&PlannerConfig::default()).unwrap();
        assert_eq!(settings.mask.to_string(), "0111110");
        assert_eq!(settings.scope, DisplayScope::Next);
        assert_eq!(
            settings.current_year_allowance,
            CurrentYearAllowance::MiscAllowance
        );
    }

    #[test]
    fn test_negative_entitlement_is_rejected() {
        let mut request: PlanRequest = serde_json::from_str(sample_json()).unwrap();
        request.entitlement.max_carry_over = -1;
        assert!(matches!(
            request.into_parts(&PlannerConfig::default()),
            Err(EngineError::InvalidEntitlement { .. })
        ));
    }

    #[test]
    fn test_bad_mask_is_rejected() {
        let mut request: PlanRequest = serde_json::from_str(sample_json()).unwrap();
        request.working_days = Some("11111".to_string());
        assert!(matches!(
            request.into_parts(&PlannerConfig::default()),
            Err(EngineError::InvalidMask { .. })
        ));
    }
}
