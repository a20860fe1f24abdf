//! Response types for the payroll engine API.
//!
//! This module defines the success bodies, the error response structure, and
//! the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{HoursSummary, PayPeriod, PayrollBreakdown, PayrollRun};

/// Response body for a successful `/calculate` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The employee paid.
    pub employee_id: String,
    /// The employee's name in "Last, First" form.
    pub employee_name: String,
    /// The period calculated.
    pub pay_period: PayPeriod,
    /// Aggregated hours.
    pub hours: HoursSummary,
    /// Rounded monetary breakdown.
    pub breakdown: PayrollBreakdown,
}

/// Response body for a successful `/payroll-runs` request.
#[derive(Debug, Clone, Serialize)]
pub struct PayrollRunResponse {
    /// The completed run.
    #[serde(flatten)]
    pub run: PayrollRun,
    /// Sum of gross pay across paychecks.
    pub total_gross: Decimal,
    /// Sum of net pay across paychecks.
    pub total_net: Decimal,
    /// Sum of employer-side taxes across paychecks.
    pub total_employer_taxes: Decimal,
}

impl From<PayrollRun> for PayrollRunResponse {
    fn from(run: PayrollRun) -> Self {
        Self {
            total_gross: run.total_gross(),
            total_net: run.total_net(),
            total_employer_taxes: run.total_employer_taxes(),
            run,
        }
    }
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
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response around `error`.
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
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        message,
                    ),
                }
            }
            EngineError::RatesNotFound { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "RATES_NOT_FOUND",
                    message,
                    "No rates table is effective for the requested pay period",
                ),
            ),
            EngineError::MissingConfiguration { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("MISSING_CONFIGURATION", message),
            },
            EngineError::InvalidRange { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_RANGE", message))
            }
            EngineError::PayTypeMismatch { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("PAY_TYPE_MISMATCH", message),
            },
            EngineError::InvalidConfiguration { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("INVALID_CONFIGURATION", message),
            },
            EngineError::InvalidTimeEntry { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_TIME_ENTRY", message))
            }
            EngineError::DuplicateTimeEntry { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("DUPLICATE_TIME_ENTRY", message))
            }
            EngineError::TimeEntryLocked { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("TIME_ENTRY_LOCKED", message),
            },
            EngineError::DuplicateEmployee { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("DUPLICATE_EMPLOYEE", message))
            }
            EngineError::RunAborted { run_id, .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "RUN_ABORTED",
                    message,
                    format!("Paychecks already recorded under run {}", run_id),
                ),
            },
        }
    }
}
