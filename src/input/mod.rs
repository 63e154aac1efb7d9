//! Input file loading for the leave planner.
//!
//! This module reads the raw data the engine consumes: public holiday
//! calendars, the planned leave range file, and the entitlement file.
//! Missing files are treated as empty; malformed leave and entitlement
//! content fails the run.

mod entitlement;
mod ics;
mod ranges;

use std::fs;
use std::path::Path;

use crate::calculation::PlannerInputs;
use crate::config::InputPaths;
use crate::error::{EngineError, EngineResult};

pub use entitlement::{load_entitlement, parse_entitlement};
pub use ics::{
    load_public_holidays, parse_dtstart_dates, read_ics_file, source_year_from_path, unfold_lines,
};
pub use ranges::{load_leave_ranges, parse_leave_ranges};

/// Loads every input named in `paths`.
///
/// # Example
///
/// ```no_run
/// use leave_planner::config::InputPaths;
/// use leave_planner::input::load_inputs;
///
/// let inputs = load_inputs(&InputPaths::default())?;
/// println!("{} leave range(s)", inputs.leave_ranges.len());
/// # Ok::<(), leave_planner::error::EngineError>(())
/// ```
pub fn load_inputs(paths: &InputPaths) -> EngineResult<PlannerInputs> {
    Ok(PlannerInputs {
        public_holidays: load_public_holidays(
            &paths.public_holidays_dir,
            &paths.public_holidays_prefix,
        )?,
        leave_ranges: load_leave_ranges(&paths.leave_ranges)?,
        entitlement: load_entitlement(&paths.entitlement)?,
    })
}

/// Reads a text file, returning `None` if it does not exist.
fn read_optional(path: &Path) -> EngineResult<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(path).map_err(|e| EngineError::InputReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(Some(decode_text(bytes)))
}

/// Decodes UTF-8, falling back to Latin-1 for anything else.
fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| char::from(b)).collect(),
    }
}
