//! Response types for the leave planner API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    fn internal(error: ApiError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidRange { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_RANGE",
                    message,
                    "Every leave range must end on or after its start date",
                ),
            ),
            EngineError::InvalidMask { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_MASK",
                    message,
                    "working_days must be seven '0'/'1' characters, Monday first",
                ),
            ),
            EngineError::InvalidEntitlement { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_ENTITLEMENT", message))
            }
            EngineError::InvalidScope { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_SCOPE", message))
            }
            EngineError::YearOutOfRange { .. } => {
                ApiErrorResponse::bad_request(ApiError::validation_error(message))
            }
            EngineError::RangeOutsideWindow { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    "Leave ranges must fall within the configured year_window around the current year",
                ))
            }
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse::internal(ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    message,
                ))
            }
            EngineError::InputReadError { .. } | EngineError::InputParseError { .. } => {
                ApiErrorResponse::internal(ApiError::with_details(
                    "INPUT_ERROR",
                    "Input data error",
                    message,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_range_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_RANGE");
        assert!(api_error.error.message.contains("2026-01-05"));
    }

    #[test]
    fn test_entitlement_error_names_field() {
        let api_error: ApiErrorResponse = EngineError::InvalidEntitlement {
            field: "carry_over_in".to_string(),
            value: -3,
        }
        .into();
        assert_eq!(api_error.error.code, "INVALID_ENTITLEMENT");
        assert!(api_error.error.message.contains("carry_over_in"));
    }

    #[test]
    fn test_year_errors_are_validation_errors() {
        let api_error: ApiErrorResponse = EngineError::YearOutOfRange { year: i32::MAX }.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");

        let api_error: ApiErrorResponse = EngineError::RangeOutsideWindow {
            start: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(1990, 1, 5).unwrap(),
            first_year: 2016,
            last_year: 2037,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert!(api_error.error.message.contains("2016 to 2037"));
    }

    #[test]
    fn test_error_response_is_json() {
        let response = ApiErrorResponse::from(EngineError::InvalidScope {
            value: "later".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn test_input_read_error_is_server_error() {
        let api_error: ApiErrorResponse = EngineError::InputReadError {
            path: "data".to_string(),
            message: "Is a directory (os error 21)".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "INPUT_ERROR");
        assert!(api_error.error.details.unwrap().contains("os error 21"));
    }

    #[test]
    fn test_config_error_is_server_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "planner.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
