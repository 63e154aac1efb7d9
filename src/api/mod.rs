//! HTTP API module for the leave planner.
//!
//! This module provides the REST API endpoints for computing leave plans
//! as JSON or as a rendered HTML calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EntitlementRequest, LeaveRangeRequest, PlanRequest, PublicHolidayRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
