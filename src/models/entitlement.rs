//! Leave entitlement model.
//!
//! This module defines [`LeaveEntitlement`], the per-person allowance read
//! once per run, and [`CurrentYearAllowance`], which selects how much of it
//! applies to the current year.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Selects the entitlement basis for the current year.
///
/// The following year always receives the base package plus the capped
/// carry-over plus the misc allowance. For the current year the base package
/// is assumed already allocated, and only one component remains available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrentYearAllowance {
    /// The current year's entitlement is the declared carry-over
    /// (`18,9,1,18` gives 9 days this year).
    #[default]
    CarryOverIn,
    /// The current year's entitlement is the misc allowance only
    /// (`18,9,1,18` gives 1 day this year).
    MiscAllowance,
}

/// Per-person leave allowance.
///
/// All fields are non-negative day counts. `carry_over_in` may exceed
/// `max_carry_over` on input; the excess is clamped when the entitlement is
/// used, never rejected and never written back.
///
/// # Example
///
/// ```
/// use leave_planner::models::LeaveEntitlement;
///
/// let entitlement = LeaveEntitlement::new(18, 30, 1, 18);
/// assert_eq!(entitlement.effective_carry_over(), 18);
/// assert_eq!(entitlement.excess_carry_over(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LeaveEntitlement {
    /// Annual leave package granted each year.
    pub base_package: u32,
    /// Unused days declared for carrying into the next year.
    pub carry_over_in: u32,
    /// Miscellaneous extra days.
    pub misc_allowance: u32,
    /// Maximum number of days that may be carried over.
    pub max_carry_over: u32,
}

impl LeaveEntitlement {
    /// Creates an entitlement from day counts.
    pub fn new(base_package: u32, carry_over_in: u32, misc_allowance: u32, max_carry_over: u32) -> Self {
        Self {
            base_package,
            carry_over_in,
            misc_allowance,
            max_carry_over,
        }
    }

    /// Creates an entitlement from signed values, as read from files or
    /// request bodies.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEntitlement`] naming the first field that
    /// is negative or does not fit a day count.
    pub fn from_signed(
        base_package: i64,
        carry_over_in: i64,
        misc_allowance: i64,
        max_carry_over: i64,
    ) -> EngineResult<Self> {
        Ok(Self {
            base_package: day_count("base_package", base_package)?,
            carry_over_in: day_count("carry_over_in", carry_over_in)?,
            misc_allowance: day_count("misc_allowance", misc_allowance)?,
            max_carry_over: day_count("max_carry_over", max_carry_over)?,
        })
    }

    /// The carry-over actually applied: `min(carry_over_in, max_carry_over)`.
    pub fn effective_carry_over(&self) -> u32 {
        self.carry_over_in.min(self.max_carry_over)
    }

    /// Declared carry-over above the cap, which is forfeited.
    pub fn excess_carry_over(&self) -> u32 {
        self.carry_over_in.saturating_sub(self.max_carry_over)
    }
}

fn day_count(field: &str, value: i64) -> EngineResult<u32> {
    u32::try_from(value).map_err(|_| EngineError::InvalidEntitlement {
        field: field.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carry_over_below_cap_is_kept() {
        let entitlement = LeaveEntitlement::new(18, 9, 1, 18);
        assert_eq!(entitlement.effective_carry_over(), 9);
        assert_eq!(entitlement.excess_carry_over(), 0);
    }

    #[test]
    fn test_carry_over_above_cap_is_clamped() {
        let entitlement = LeaveEntitlement::new(18, 30, 1, 18);
        assert_eq!(entitlement.effective_carry_over(), 18);
        assert_eq!(entitlement.excess_carry_over(), 12);
        // The input itself is not rewritten
        assert_eq!(entitlement.carry_over_in, 30);
    }

    #[test]
    fn test_zero_cap_forfeits_all_carry_over() {
        let entitlement = LeaveEntitlement::new(14, 5, 0, 0);
        assert_eq!(entitlement.effective_carry_over(), 0);
        assert_eq!(entitlement.excess_carry_over(), 5);
    }

    #[test]
    fn test_from_signed_accepts_non_negative_values() {
        let entitlement = LeaveEntitlement::from_signed(18, 9, 1, 18).unwrap();
        assert_eq!(entitlement, LeaveEntitlement::new(18, 9, 1, 18));
    }

    #[test]
    fn test_from_signed_rejects_negative_field() {
        match LeaveEntitlement::from_signed(18, 9, -1, 18) {
            Err(EngineError::InvalidEntitlement { field, value }) => {
                assert_eq!(field, "misc_allowance");
                assert_eq!(value, -1);
            }
            other => panic!("Expected InvalidEntitlement error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_signed_rejects_oversized_field() {
        assert!(matches!(
            LeaveEntitlement::from_signed(i64::MAX, 0, 0, 0),
            Err(EngineError::InvalidEntitlement { .. })
        ));
    }

    #[test]
    fn test_current_year_allowance_serde() {
        assert_eq!(
            serde_json::to_string(&CurrentYearAllowance::CarryOverIn).unwrap(),
            "\"carry_over_in\""
        );
        let parsed: CurrentYearAllowance = serde_json::from_str("\"misc_allowance\"").unwrap();
        assert_eq!(parsed, CurrentYearAllowance::MiscAllowance);
    }
}
