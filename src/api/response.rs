//! Response types for the Hotel Operations Engine API.
//!
//! This module defines the success bodies, the error response structure,
//! and the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{DayLedger, ForecastSummary, PayrollLine, PayrollTotals};

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok".
    pub status: String,
    /// Engine version.
    pub version: String,
}

/// Body returned by both forecast endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Unique identifier for this forecast.
    pub forecast_id: Uuid,
    /// One ledger per day, in date order.
    pub days: Vec<DayLedger>,
    /// Roll-up of `days`.
    pub summary: ForecastSummary,
}

/// Body returned by the payroll run endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunResponse {
    /// One line per staff member, in input order.
    pub lines: Vec<PayrollLine>,
    /// Column totals.
    pub totals: PayrollTotals,
    /// The PAYE schedule applied.
    pub schedule_version: String,
}

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
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
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
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::TaxScheduleNotFound { date } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "TAX_SCHEDULE_NOT_FOUND",
                    format!("No tax schedule effective on {}", date),
                    "The pay date precedes every configured PAYE schedule",
                ),
            ),
            EngineError::InvalidDateRange { start, end } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    format!("End date {} is before start date {}", end, start),
                    "The range end must be on or after its start",
                ),
            ),
            EngineError::ForecastWindowTooLarge { days, max } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "FORECAST_WINDOW_TOO_LARGE",
                    format!("Requested {} days; at most {} are allowed", days, max),
                    "Split the request into smaller windows",
                ),
            ),
            EngineError::InvalidBooking {
                booking_id,
                message,
            } => ApiErrorResponse::bad_request(ApiError::with_details(
                "INVALID_BOOKING",
                format!("Invalid booking '{}': {}", booking_id, message),
                "The booking data contains invalid information",
            )),
            EngineError::InvalidStaff { field, message } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_STAFF",
                    format!("Invalid staff field '{}': {}", field, message),
                    "The staff data contains invalid information",
                ),
            ),
            EngineError::Storage { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORAGE_ERROR",
                    "Storage error",
                    format!("{}: {}", path, message),
                ),
            },
        }
    }
}
