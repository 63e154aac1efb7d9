//! Error types for the leave planner.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building a leave plan.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the leave planner.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_planner::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidRange {
///     start: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: start 2026-01-05 is after end 2026-01-01"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date range had its start after its end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// The first date of the range.
        start: NaiveDate,
        /// The last date of the range.
        end: NaiveDate,
    },

    /// The working-day specification was malformed.
    #[error("Invalid working-day mask '{spec}': {message}")]
    InvalidMask {
        /// The specification as supplied.
        spec: String,
        /// A description of what made the mask invalid.
        message: String,
    },

    /// An entitlement field was negative or too large to represent.
    #[error("Invalid entitlement field '{field}': {value} is not a non-negative day count")]
    InvalidEntitlement {
        /// The field that was invalid.
        field: String,
        /// The rejected value.
        value: i64,
    },

    /// The display scope selector was not one of `current`, `next`, `both`.
    #[error("Invalid display scope '{value}': expected current, next or both")]
    InvalidScope {
        /// The selector as supplied.
        value: String,
    },

    /// A year could not be turned into a calendar span.
    #[error("Year {year} is outside the supported calendar range")]
    YearOutOfRange {
        /// The offending year.
        year: i32,
    },

    /// A leave range reached outside the years a plan may cover.
    #[error(
        "Leave range {start} to {end} is outside the supported years {first_year} to {last_year}"
    )]
    RangeOutsideWindow {
        /// The first date of the range.
        start: NaiveDate,
        /// The last date of the range.
        end: NaiveDate,
        /// The earliest year a plan may cover.
        first_year: i32,
        /// The latest year a plan may cover.
        last_year: i32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An input data file exists but could not be read.
    #[error("Failed to read input '{path}': {message}")]
    InputReadError {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// An input data file contained malformed content.
    #[error("Failed to parse input '{path}': {message}")]
    InputParseError {
        /// The path (or source label) of the input.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
