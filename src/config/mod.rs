//! Configuration loading and management for the leave planner.
//!
//! This module provides functionality to load the planner configuration
//! from a YAML file: the working-day mask, display scope, current year,
//! entitlement basis, and the locations of the input data files.
//!
//! # Example
//!
//! ```no_run
//! use leave_planner::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/planner.yaml").unwrap();
//! println!("Rendering: {}", config.config().title);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{InputPaths, PlannerConfig};
