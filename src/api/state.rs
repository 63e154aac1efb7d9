//! Application state for the leave planner API.

use std::sync::Arc;

use crate::config::PlannerConfig;

/// Shared application state.
///
/// Holds the server's configuration, whose settings fill in anything a
/// request leaves unset.
#[derive(Clone)]
pub struct AppState {
    config: Arc<PlannerConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the server configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}
