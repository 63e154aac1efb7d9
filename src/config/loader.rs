//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the planner
//! configuration from a YAML file and turning it into engine settings.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calculation::{PlannerSettings, WeeklyMask};
use crate::error::{EngineError, EngineResult};

use super::types::PlannerConfig;

/// Loads and provides access to the planner configuration.
///
/// # Example
///
/// ```no_run
/// use leave_planner::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/planner.yaml").unwrap();
/// let settings = loader.settings().unwrap();
/// println!("Working days: {}", settings.mask);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PlannerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or unknown enum values
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leave_planner::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/planner.yaml")?;
    /// # Ok::<(), leave_planner::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: PlannerConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %path_str, "Loaded planner configuration");
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PlannerConfig {
        self.config
    }

    /// Builds engine settings from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMask`] if `working_days` is malformed.
    pub fn settings(&self) -> EngineResult<PlannerSettings> {
        Ok(PlannerSettings {
            mask: WeeklyMask::parse(&self.config.working_days)?,
            scope: self.config.show_years,
            current_year: self.config.resolved_current_year(),
            current_year_allowance: self.config.current_year_allowance,
            year_window: self.config.year_window,
        })
    }
}
