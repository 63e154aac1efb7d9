//! Configuration types for the leave planner.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every field has a
//! default, so an empty file is a valid configuration.

use std::path::PathBuf;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::calculation::{DEFAULT_WORKING_DAYS, DEFAULT_YEAR_WINDOW};
use crate::models::{CurrentYearAllowance, DisplayScope};

/// Locations of the input data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputPaths {
    /// Directory holding the public holiday `.ics` files.
    pub public_holidays_dir: PathBuf,
    /// File name prefix a holiday file must start with.
    pub public_holidays_prefix: String,
    /// File of planned leave ranges (`yyyymmdd-yyyymmdd` tokens).
    pub leave_ranges: PathBuf,
    /// File holding `package,carry_over,misc,cap`.
    pub entitlement: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            public_holidays_dir: PathBuf::from("public-holidays"),
            public_holidays_prefix: "public-holidays-sg-".to_string(),
            leave_ranges: PathBuf::from("holidays.csv"),
            entitlement: PathBuf::from("leave.csv"),
        }
    }
}

/// The complete planner configuration.
///
/// # Example
///
/// ```
/// use leave_planner::config::PlannerConfig;
/// use leave_planner::models::DisplayScope;
///
/// let config: PlannerConfig = serde_yaml::from_str("show_years: next\ncurrent_year: 2026\n").unwrap();
/// assert_eq!(config.show_years, DisplayScope::Next);
/// assert_eq!(config.working_days, "1111100");
/// assert_eq!(config.resolved_current_year(), 2026);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Title of the rendered page.
    pub title: String,
    /// Seven `0`/`1` characters, Monday first.
    pub working_days: String,
    /// Which years to display and report.
    pub show_years: DisplayScope,
    /// The current year; today's year when absent.
    pub current_year: Option<i32>,
    /// The current-year entitlement basis.
    pub current_year_allowance: CurrentYearAllowance,
    /// Years before the current year and after the next one that leave
    /// ranges and holidays may reach into.
    pub year_window: u32,
    /// Input data locations.
    pub inputs: InputPaths,
    /// Where the rendered HTML page is written.
    pub output: PathBuf,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            title: "Leave Planner".to_string(),
            working_days: DEFAULT_WORKING_DAYS.to_string(),
            show_years: DisplayScope::default(),
            current_year: None,
            current_year_allowance: CurrentYearAllowance::default(),
            year_window: DEFAULT_YEAR_WINDOW,
            inputs: InputPaths::default(),
            output: PathBuf::from("leave_plan.html"),
        }
    }
}

impl PlannerConfig {
    /// The configured current year, or the local calendar year today.
    pub fn resolved_current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| Local::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: PlannerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.inputs.leave_ranges, PathBuf::from("holidays.csv"));
    }

    #[test]
    fn test_partial_inputs_section_keeps_other_defaults() {
        let yaml = "inputs:\n  leave_ranges: data/leave-ranges.csv\n";
        let config: PlannerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.inputs.leave_ranges, PathBuf::from("data/leave-ranges.csv"));
        assert_eq!(config.inputs.entitlement, PathBuf::from("leave.csv"));
        assert_eq!(config.inputs.public_holidays_prefix, "public-holidays-sg-");
    }

    #[test]
    fn test_allowance_from_yaml() {
        let config: PlannerConfig =
            serde_yaml::from_str("current_year_allowance: misc_allowance\n").unwrap();
        assert_eq!(
            config.current_year_allowance,
            CurrentYearAllowance::MiscAllowance
        );
    }

    #[test]
    fn test_year_window_from_yaml() {
        let config: PlannerConfig = serde_yaml::from_str("year_window: 3\n").unwrap();
        assert_eq!(config.year_window, 3);
        assert_eq!(PlannerConfig::default().year_window, DEFAULT_YEAR_WINDOW);
    }

    #[test]
    fn test_unknown_scope_is_rejected() {
        assert!(serde_yaml::from_str::<PlannerConfig>("show_years: later\n").is_err());
    }

    #[test]
    fn test_resolved_current_year_defaults_to_today() {
        let config = PlannerConfig::default();
        assert_eq!(config.resolved_current_year(), Local::now().year());
    }
}
