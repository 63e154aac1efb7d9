//! Entitlement file parsing.
//!
//! The first non-blank line holds `package,carry_over,misc,cap`.

use std::path::Path;

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::LeaveEntitlement;

use super::read_optional;

/// Parses an entitlement line.
///
/// Content with no non-blank line yields an all-zero entitlement.
///
/// # Errors
///
/// Returns [`EngineError::InputParseError`] if the line does not hold exactly
/// four integers, and [`EngineError::InvalidEntitlement`] if any is negative.
///
/// # Example
///
/// ```
/// use leave_planner::input::parse_entitlement;
/// use leave_planner::models::LeaveEntitlement;
///
/// let entitlement = parse_entitlement("18,9,1,18\n", "leave.csv").unwrap();
/// assert_eq!(entitlement, LeaveEntitlement::new(18, 9, 1, 18));
/// ```
pub fn parse_entitlement(content: &str, source: &str) -> EngineResult<LeaveEntitlement> {
    let Some(line) = content.lines().map(str::trim).find(|line| !line.is_empty()) else {
        return Ok(LeaveEntitlement::default());
    };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(EngineError::InputParseError {
            path: source.to_string(),
            message: format!("expected 4 comma-separated values, found {}", fields.len()),
        });
    }

    let mut values = [0i64; 4];
    for (slot, field) in values.iter_mut().zip(&fields) {
        *slot = field.parse().map_err(|_| EngineError::InputParseError {
            path: source.to_string(),
            message: format!("'{}' is not an integer", field),
        })?;
    }

    LeaveEntitlement::from_signed(values[0], values[1], values[2], values[3])
}

/// Loads the entitlement from `path`. A missing file yields an all-zero
/// entitlement.
pub fn load_entitlement(path: &Path) -> EngineResult<LeaveEntitlement> {
    match read_optional(path)? {
        Some(content) => parse_entitlement(&content, &path.display().to_string()),
        None => {
            warn!(path = %path.display(), "Entitlement file not found, assuming zero entitlement");
            Ok(LeaveEntitlement::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_non_blank_line_is_used() {
        let entitlement = parse_entitlement("\n  \n 14, 3 ,0,5 \n99,99,99,99\n", "leave.csv").unwrap();
        assert_eq!(entitlement, LeaveEntitlement::new(14, 3, 0, 5));
    }

    #[test]
    fn test_empty_content_is_zero_entitlement() {
        assert_eq!(
            parse_entitlement("", "leave.csv").unwrap(),
            LeaveEntitlement::default()
        );
    }

    #[test]
    fn test_wrong_field_count_is_an_error() {
        match parse_entitlement("18,9,1", "leave.csv") {
            Err(EngineError::InputParseError { message, .. }) => {
                assert!(message.contains("found 3"));
            }
            other => panic!("Expected InputParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_non_integer_is_an_error() {
        assert!(matches!(
            parse_entitlement("18,nine,1,18", "leave.csv"),
            Err(EngineError::InputParseError { .. })
        ));
    }

    #[test]
    fn test_negative_field_is_invalid_entitlement() {
        match parse_entitlement("18,-2,1,18", "leave.csv") {
            Err(EngineError::InvalidEntitlement { field, value }) => {
                assert_eq!(field, "carry_over_in");
                assert_eq!(value, -2);
            }
            other => panic!("Expected InvalidEntitlement, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_zero_entitlement() {
        assert_eq!(
            load_entitlement(Path::new("/nonexistent/leave.csv")).unwrap(),
            LeaveEntitlement::default()
        );
    }
}
