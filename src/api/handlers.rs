//! HTTP request handlers for the leave planner API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::LeavePlanner;
use crate::models::LeavePlan;
use crate::render::render_page;

use super::request::PlanRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/plan", post(plan_handler))
        .route("/plan/html", post(plan_html_handler))
        .with_state(state)
}

/// Handler for POST /plan.
///
/// Returns the computed plan as JSON.
async fn plan_handler(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing plan request");

    match compute_plan(&state, payload, correlation_id) {
        Ok((plan, _)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(plan),
        )
            .into_response(),
        Err(response) => response,
    }
}

/// Handler for POST /plan/html.
///
/// Returns the rendered calendar page.
async fn plan_html_handler(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing HTML plan request");

    let (plan, title) = match compute_plan(&state, payload, correlation_id) {
        Ok(computed) => computed,
        Err(response) => return response,
    };

    match render_page(&plan, &title) {
        Ok(html) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            html,
        )
            .into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rendering failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Validates the request and runs the planner, returning the plan and the
/// page title to use.
fn compute_plan(
    state: &AppState,
    payload: Result<Json<PlanRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<(LeavePlan, String), Response> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response());
        }
    };

    let config = state.config();
    let title = request.title.clone().unwrap_or_else(|| config.title.clone());

    let (settings, inputs) = request.into_parts(config).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid plan request");
        ApiErrorResponse::from(err).into_response()
    })?;

    let plan = LeavePlanner::new(settings).plan(&inputs).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Planning failed");
        ApiErrorResponse::from(err).into_response()
    })?;

    info!(
        correlation_id = %correlation_id,
        calculation_id = %plan.calculation_id,
        leave_ranges = inputs.leave_ranges.len(),
        annual_leave_used = plan.summary.annual_leave_used,
        duration_us = plan.audit_trace.duration_us,
        "Plan completed successfully"
    );

    Ok((plan, title))
}
