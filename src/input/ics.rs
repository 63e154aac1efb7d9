//! Public holiday calendar (iCalendar) parsing.
//!
//! Only the start date of each `VEVENT` is read. Holiday calendars are
//! third-party files, so malformed `DTSTART` lines are skipped rather than
//! failing the run.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::PublicHoliday;

use super::decode_text;

/// Unfolds RFC 5545 continuation lines.
///
/// A line beginning with a single space continues the previous line; the
/// space is dropped. Trailing CR/LF is stripped from every line.
///
/// # Example
///
/// ```
/// use leave_planner::input::unfold_lines;
///
/// let lines = unfold_lines("DTSTART;VALUE=DATE:\r\n 20260810\r\nEND:VEVENT\r\n");
/// assert_eq!(lines, vec!["DTSTART;VALUE=DATE:20260810", "END:VEVENT"]);
/// ```
pub fn unfold_lines(content: &str) -> Vec<String> {
    let mut unfolded: Vec<String> = Vec::new();
    for raw in content.lines() {
        let line = raw.trim_end_matches(['\r', '\n']);
        match (line.strip_prefix(' '), unfolded.last_mut()) {
            (Some(continuation), Some(previous)) => previous.push_str(continuation),
            _ => unfolded.push(line.to_string()),
        }
    }
    unfolded
}

/// Extracts the start dates of all events in an iCalendar document.
///
/// Accepts both `DTSTART;VALUE=DATE:20260101` and `DTSTART:20260101T090000`;
/// only the leading `YYYYMMDD` of the value is used.
pub fn parse_dtstart_dates(content: &str) -> BTreeSet<NaiveDate> {
    let mut dates = BTreeSet::new();
    let mut in_event = false;

    for line in unfold_lines(content) {
        if line.starts_with("BEGIN:VEVENT") {
            in_event = true;
        } else if line.starts_with("END:VEVENT") {
            in_event = false;
        } else if in_event && line.starts_with("DTSTART") {
            match dtstart_date(&line) {
                Some(date) => {
                    dates.insert(date);
                }
                None => debug!(line = %line, "Skipping malformed DTSTART"),
            }
        }
    }

    dates
}

fn dtstart_date(line: &str) -> Option<NaiveDate> {
    let (_, value) = line.split_once(':')?;
    let digits = value.trim().get(..8)?;
    NaiveDate::parse_from_str(digits, "%Y%m%d").ok()
}

/// Reads holiday dates from a single `.ics` file.
///
/// A missing file yields no dates.
pub fn read_ics_file(path: &Path) -> EngineResult<BTreeSet<NaiveDate>> {
    if !path.exists() {
        warn!(path = %path.display(), "Holiday calendar not found");
        return Ok(BTreeSet::new());
    }

    let bytes = fs::read(path).map_err(|e| EngineError::InputReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(parse_dtstart_dates(&decode_text(bytes)))
}

/// The year a holiday file describes, from the trailing digits of its stem
/// (`public-holidays-sg-2026.ics` gives 2026).
pub fn source_year_from_path(path: &Path) -> Option<i32> {
    let stem = path.file_stem()?.to_str()?;
    let digits: String = stem
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if digits.len() == 4 {
        digits.parse().ok()
    } else {
        None
    }
}

/// Loads public holidays from every `<prefix>*.ics` file in `dir`.
///
/// Files are read in name order and each date is tagged with the file's
/// year. A missing directory yields no holidays.
pub fn load_public_holidays(dir: &Path, prefix: &str) -> EngineResult<Vec<PublicHoliday>> {
    if !dir.exists() {
        warn!(dir = %dir.display(), "Public holiday directory not found");
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|e| EngineError::InputReadError {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| EngineError::InputReadError {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        let path = entry.path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(prefix) && name.ends_with(".ics"));
        if matches {
            files.push(path);
        }
    }
    files.sort();

    let mut holidays = Vec::new();
    for file in &files {
        let dates = read_ics_file(file)?;
        let source_year = source_year_from_path(file);
        debug!(file = %file.display(), dates = dates.len(), "Loaded holiday calendar");
        holidays.extend(dates.into_iter().map(|date| match source_year {
            Some(year) => PublicHoliday::with_source_year(date, year),
            None => PublicHoliday::new(date),
        }));
    }

    Ok(holidays)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    const CALENDAR: &str = "BEGIN:VCALENDAR\r\n\
        VERSION:2.0\r\n\
        DTSTART:19700101\r\n\
        BEGIN:VEVENT\r\n\
        DTSTART;VALUE=DATE:20260101\r\n\
        SUMMARY:New Year's Day\r\n\
        END:VEVENT\r\n\
        BEGIN:VEVENT\r\n\
        DTSTART:20260403T000000\r\n\
        END:VEVENT\r\n\
        BEGIN:VEVENT\r\n\
        DTSTART;VALUE=DATE:\r\n 20260810\r\n\
        END:VEVENT\r\n\
        BEGIN:VEVENT\r\n\
        DTSTART;VALUE=DATE:2026\r\n\
        END:VEVENT\r\n\
        END:VCALENDAR\r\n";

    #[test]
    fn test_parse_dtstart_dates() {
        let dates = parse_dtstart_dates(CALENDAR);
        assert_eq!(
            dates.into_iter().collect::<Vec<_>>(),
            vec![
                make_date("2026-01-01"),
                make_date("2026-04-03"),
                make_date("2026-08-10"),
            ]
        );
    }

    #[test]
    fn test_dtstart_outside_event_is_ignored() {
        let dates = parse_dtstart_dates(CALENDAR);
        assert!(!dates.contains(&make_date("1970-01-01")));
    }

    #[test]
    fn test_unfold_keeps_first_line_with_leading_space() {
        let lines = unfold_lines(" BEGIN:VCALENDAR\nVERSION:2.0\n");
        assert_eq!(lines, vec![" BEGIN:VCALENDAR", "VERSION:2.0"]);
    }

    #[test]
    fn test_source_year_from_path() {
        assert_eq!(
            source_year_from_path(Path::new("dir/public-holidays-sg-2026.ics")),
            Some(2026)
        );
        assert_eq!(source_year_from_path(Path::new("holidays.ics")), None);
        assert_eq!(source_year_from_path(Path::new("holidays-v12.ics")), None);
    }

    #[test]
    fn test_missing_file_yields_no_dates() {
        let dates = read_ics_file(Path::new("/nonexistent/public-holidays-sg-2026.ics")).unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn test_missing_directory_yields_no_holidays() {
        let holidays =
            load_public_holidays(Path::new("/nonexistent/dir"), "public-holidays-sg-").unwrap();
        assert!(holidays.is_empty());
    }

    #[test]
    fn test_directory_as_calendar_reports_io_error() {
        assert!(matches!(
            read_ics_file(Path::new("./data/public-holidays")),
            Err(EngineError::InputReadError { .. })
        ));
        assert!(matches!(
            load_public_holidays(Path::new("./data/holidays.csv"), "public-holidays-sg-"),
            Err(EngineError::InputReadError { .. })
        ));
    }

    #[test]
    fn test_load_fixture_directory() {
        let holidays =
            load_public_holidays(Path::new("./data/public-holidays"), "public-holidays-sg-")
                .unwrap();

        assert_eq!(holidays.len(), 12);
        assert!(holidays.contains(&PublicHoliday::with_source_year(
            make_date("2026-08-10"),
            2026
        )));
        assert!(holidays.contains(&PublicHoliday::with_source_year(
            make_date("2027-05-01"),
            2027
        )));
    }

    #[test]
    fn test_prefix_filters_files() {
        let holidays =
            load_public_holidays(Path::new("./data/public-holidays"), "public-holidays-my-")
                .unwrap();
        assert!(holidays.is_empty());
    }
}
