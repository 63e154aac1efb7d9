//! Planned leave range file parsing.
//!
//! The file lists tokens separated by commas and/or newlines. Each token is
//! either `yyyymmdd-yyyymmdd` or a single `yyyymmdd` day.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::LeaveRange;

use super::read_optional;

/// Parses leave range tokens.
///
/// `source` labels the input in error messages.
///
/// # Errors
///
/// Returns [`EngineError::InputParseError`] for a token that is not a date
/// or date pair, and [`EngineError::InvalidRange`] for a reversed pair.
///
/// # Example
///
/// ```
/// use leave_planner::input::parse_leave_ranges;
///
/// let ranges = parse_leave_ranges("20260101-20260105,\n20260601\n", "holidays.csv").unwrap();
/// assert_eq!(ranges.len(), 2);
/// assert_eq!(ranges[1].start_date, ranges[1].end_date);
/// ```
pub fn parse_leave_ranges(content: &str, source: &str) -> EngineResult<Vec<LeaveRange>> {
    content
        .split([',', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| parse_token(token, source))
        .collect()
}

fn parse_token(token: &str, source: &str) -> EngineResult<LeaveRange> {
    match token.split_once('-') {
        Some((start, end)) => {
            LeaveRange::new(parse_date(start.trim(), source)?, parse_date(end.trim(), source)?)
        }
        None => Ok(LeaveRange::single_day(parse_date(token, source)?)),
    }
}

fn parse_date(value: &str, source: &str) -> EngineResult<NaiveDate> {
    let malformed = || EngineError::InputParseError {
        path: source.to_string(),
        message: format!("'{}' is not a yyyymmdd date", value),
    };
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|_| malformed())
}

/// Loads leave ranges from `path`. A missing file yields no ranges.
pub fn load_leave_ranges(path: &Path) -> EngineResult<Vec<LeaveRange>> {
    let Some(content) = read_optional(path)? else {
        warn!(path = %path.display(), "Leave range file not found");
        return Ok(Vec::new());
    };
    let ranges = parse_leave_ranges(&content, &path.display().to_string())?;
    debug!(path = %path.display(), ranges = ranges.len(), "Loaded leave ranges");
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_ranges_and_single_days() {
        let ranges = parse_leave_ranges(
            "20260101-20260105, 20260406-20260410\n20260601\n\n",
            "holidays.csv",
        )
        .unwrap();

        assert_eq!(
            ranges,
            vec![
                LeaveRange::new(make_date("2026-01-01"), make_date("2026-01-05")).unwrap(),
                LeaveRange::new(make_date("2026-04-06"), make_date("2026-04-10")).unwrap(),
                LeaveRange::single_day(make_date("2026-06-01")),
            ]
        );
    }

    #[test]
    fn test_windows_line_endings() {
        let ranges = parse_leave_ranges("20260101-20260102\r\n20260105\r\n", "x").unwrap();
        assert_eq!(ranges.len(), 2);
    }

    #[test]
    fn test_empty_content_yields_no_ranges() {
        assert!(parse_leave_ranges("  \n,,\n", "holidays.csv").unwrap().is_empty());
    }

    #[test]
    fn test_reversed_range_is_an_error() {
        let result = parse_leave_ranges("20260110-20260101", "holidays.csv");
        assert!(matches!(result, Err(EngineError::InvalidRange { .. })));
    }

    #[test]
    fn test_malformed_token_is_an_error() {
        match parse_leave_ranges("20260101-2026013x", "holidays.csv") {
            Err(EngineError::InputParseError { path, message }) => {
                assert_eq!(path, "holidays.csv");
                assert!(message.contains("2026013x"));
            }
            other => panic!("Expected InputParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_impossible_date_is_an_error() {
        assert!(matches!(
            parse_leave_ranges("20260230", "holidays.csv"),
            Err(EngineError::InputParseError { .. })
        ));
    }

    #[test]
    fn test_missing_file_yields_no_ranges() {
        assert!(load_leave_ranges(Path::new("/nonexistent/holidays.csv"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_load_fixture_file() {
        let ranges = load_leave_ranges(Path::new("./data/holidays.csv")).unwrap();
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[2].end_date, make_date("2027-01-04"));
    }
}
