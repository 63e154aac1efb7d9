//! Weekly working-day mask.
//!
//! A [`WeeklyMask`] answers "is this weekday a working day at all",
//! independent of any holiday or leave status.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Symbol marking a working weekday in a mask specification.
pub const WORKING_SYMBOL: char = '1';

/// Symbol marking a non-working weekday in a mask specification.
pub const NON_WORKING_SYMBOL: char = '0';

/// The standard Monday to Friday working week.
pub const DEFAULT_WORKING_DAYS: &str = "1111100";

/// Seven working/non-working flags indexed Monday (0) through Sunday (6).
///
/// Any subset of days may be working days, so non-standard weeks such as
/// Sunday to Thursday are expressible.
///
/// # Example
///
/// ```
/// use leave_planner::calculation::WeeklyMask;
/// use chrono::NaiveDate;
///
/// let mask = WeeklyMask::parse("1111100").unwrap();
///
/// // 2026-01-02 is a Friday, 2026-01-03 a Saturday
/// assert!(mask.is_working_weekday(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()));
/// assert!(!mask.is_working_weekday(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeeklyMask {
    flags: [bool; 7],
}

impl WeeklyMask {
    /// Builds a mask directly from Monday..Sunday flags.
    pub fn from_flags(flags: [bool; 7]) -> Self {
        Self { flags }
    }

    /// Parses a 7-character specification of `1` (working) and `0`
    /// (non-working), Monday first. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMask`] if the specification is not
    /// exactly 7 characters or contains any other symbol.
    pub fn parse(spec: &str) -> EngineResult<Self> {
        let trimmed = spec.trim();
        let length = trimmed.chars().count();
        if length != 7 {
            return Err(EngineError::InvalidMask {
                spec: spec.to_string(),
                message: format!("expected 7 characters, found {}", length),
            });
        }

        let mut flags = [false; 7];
        for (index, symbol) in trimmed.chars().enumerate() {
            flags[index] = match symbol {
                WORKING_SYMBOL => true,
                NON_WORKING_SYMBOL => false,
                other => {
                    return Err(EngineError::InvalidMask {
                        spec: spec.to_string(),
                        message: format!(
                            "unexpected character '{}' at position {}, only '{}' and '{}' are allowed",
                            other,
                            index + 1,
                            WORKING_SYMBOL,
                            NON_WORKING_SYMBOL
                        ),
                    });
                }
            };
        }

        Ok(Self { flags })
    }

    /// Returns true if the weekday of `date` is a working day.
    pub fn is_working_weekday(&self, date: NaiveDate) -> bool {
        self.is_working(date.weekday())
    }

    /// Returns true if `weekday` is a working day.
    pub fn is_working(&self, weekday: Weekday) -> bool {
        self.flags[weekday.num_days_from_monday() as usize]
    }

    /// The number of working days per week.
    pub fn working_days_per_week(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }

    /// The raw Monday..Sunday flags.
    pub fn flags(&self) -> [bool; 7] {
        self.flags
    }
}

impl Default for WeeklyMask {
    fn default() -> Self {
        Self {
            flags: [true, true, true, true, true, false, false],
        }
    }
}

impl fmt::Display for WeeklyMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in self.flags {
            let symbol = if flag { WORKING_SYMBOL } else { NON_WORKING_SYMBOL };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for WeeklyMask {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WeeklyMask {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WeeklyMask> for String {
    fn from(mask: WeeklyMask) -> Self {
        mask.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_standard_week() {
        let mask = WeeklyMask::parse("1111100").unwrap();
        // 2026-01-12 is a Monday
        let monday = make_date("2026-01-12");
        let working: Vec<bool> = (0..7)
            .map(|offset| mask.is_working_weekday(monday + chrono::Duration::days(offset)))
            .collect();
        assert_eq!(working, vec![true, true, true, true, true, false, false]);
    }

    #[test]
    fn test_sunday_to_thursday_week() {
        let mask = WeeklyMask::parse("1111001").unwrap();
        assert!(mask.is_working(Weekday::Sun));
        assert!(!mask.is_working(Weekday::Fri));
        assert!(!mask.is_working(Weekday::Sat));
        assert_eq!(mask.working_days_per_week(), 5);
    }

    #[test]
    fn test_default_matches_default_spec() {
        assert_eq!(WeeklyMask::default(), WeeklyMask::parse(DEFAULT_WORKING_DAYS).unwrap());
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(
            WeeklyMask::parse(" 1111100\n").unwrap(),
            WeeklyMask::default()
        );
    }

    #[test]
    fn test_wrong_length_returns_error() {
        match WeeklyMask::parse("11111") {
            Err(EngineError::InvalidMask { spec, message }) => {
                assert_eq!(spec, "11111");
                assert!(message.contains("found 5"));
            }
            other => panic!("Expected InvalidMask error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_symbol_returns_error() {
        match WeeklyMask::parse("11x1100") {
            Err(EngineError::InvalidMask { message, .. }) => {
                assert!(message.contains("'x'"));
                assert!(message.contains("position 3"));
            }
            other => panic!("Expected InvalidMask error, got {:?}", other),
        }
    }

    #[test]
    fn test_display_round_trips_spec() {
        assert_eq!(WeeklyMask::parse("0111110").unwrap().to_string(), "0111110");
    }

    #[test]
    fn test_serde_uses_string_form() {
        let mask = WeeklyMask::parse("1111110").unwrap();
        assert_eq!(serde_json::to_string(&mask).unwrap(), "\"1111110\"");

        let parsed: WeeklyMask = serde_json::from_str("\"1010100\"").unwrap();
        assert_eq!(parsed.working_days_per_week(), 3);

        assert!(serde_json::from_str::<WeeklyMask>("\"12\"").is_err());
    }
}
