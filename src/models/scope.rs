//! Display scope selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Which year(s) to compute and report balances for.
///
/// # Example
///
/// ```
/// use leave_planner::models::DisplayScope;
///
/// let scope: DisplayScope = "next".parse().unwrap();
/// assert_eq!(scope.years(2026).unwrap(), vec![2027]);
/// assert_eq!(DisplayScope::Both.years(2026).unwrap(), vec![2026, 2027]);
/// assert!(DisplayScope::Next.years(i32::MAX).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayScope {
    /// The current year only.
    Current,
    /// The following year only.
    Next,
    /// The current and the following year.
    #[default]
    Both,
}

impl DisplayScope {
    /// The years in scope, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::YearOutOfRange`] if the following year does
    /// not fit in an `i32`.
    pub fn years(self, current_year: i32) -> EngineResult<Vec<i32>> {
        let next_year = current_year
            .checked_add(1)
            .ok_or(EngineError::YearOutOfRange { year: current_year })?;
        Ok(match self {
            DisplayScope::Current => vec![current_year],
            DisplayScope::Next => vec![next_year],
            DisplayScope::Both => vec![current_year, next_year],
        })
    }

    /// Returns true if `year` is reported under this scope.
    pub fn includes(self, year: i32, current_year: i32) -> bool {
        self.years(current_year).is_ok_and(|years| years.contains(&year))
    }
}

impl fmt::Display for DisplayScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayScope::Current => write!(f, "current"),
            DisplayScope::Next => write!(f, "next"),
            DisplayScope::Both => write!(f, "both"),
        }
    }
}

impl FromStr for DisplayScope {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "current" => Ok(DisplayScope::Current),
            "next" => Ok(DisplayScope::Next),
            "both" => Ok(DisplayScope::Both),
            _ => Err(EngineError::InvalidScope {
                value: s.to_string(),
            }),
        }
    }
}
