//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::HashSet;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, PayPeriod};
use crate::orchestrator::PayrollRunner;
use crate::store::InMemoryStore;

use super::request::{CalculationRequest, PayrollRunRequest, index_request_entries};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, PayrollRunResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/payroll-runs", post(payroll_run_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Computes one employee's breakdown for one pay period.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let start_time = Instant::now();
    match perform_calculation(&state, request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %response.employee_id,
                gross = %response.breakdown.gross,
                net = %response.breakdown.net,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /payroll-runs endpoint.
///
/// Runs payroll over an inline roster and returns the run with its totals.
async fn payroll_run_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRunRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll run request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    match perform_run(&state, request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                run_id = %response.run.id,
                paychecks = response.run.paychecks.len(),
                skipped = response.run.skipped.len(),
                "Payroll run request completed"
            );
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payroll run failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn perform_calculation(
    state: &AppState,
    request: CalculationRequest,
) -> EngineResult<CalculationResponse> {
    let employee: Employee = request.employee.into();
    let pay_period: PayPeriod = request.pay_period.into();
    pay_period.validate()?;

    let entries = index_request_entries(&employee, request.time_entries)?;
    let calculator = state.calculator_for(pay_period.start_date)?;
    let calculation = calculator.compute_detailed(
        &employee,
        request.pay_configuration.as_ref(),
        &pay_period,
        &entries,
    )?;

    Ok(CalculationResponse {
        calculation_id: Uuid::new_v4(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_name: employee.display_name(),
        employee_id: employee.id,
        pay_period,
        hours: calculation.hours,
        breakdown: calculation.breakdown,
    })
}

fn perform_run(state: &AppState, request: PayrollRunRequest) -> EngineResult<PayrollRunResponse> {
    let pay_period: PayPeriod = request.pay_period.into();
    pay_period.validate()?;

    let calculator = state.calculator_for(pay_period.start_date)?;

    let store = InMemoryStore::new();
    let mut employees = Vec::with_capacity(request.employees.len());
    let mut seen = HashSet::with_capacity(request.employees.len());
    for member in request.employees {
        let employee: Employee = member.employee.into();
        if !seen.insert(employee.id.clone()) {
            return Err(EngineError::DuplicateEmployee {
                employee_id: employee.id,
            });
        }
        if let Some(configuration) = member.pay_configuration {
            store.set_pay_configuration(employee.id.clone(), configuration);
        }
        for entry in index_request_entries(&employee, member.time_entries)?.into_values() {
            store.save_time_entry(entry)?;
        }
        employees.push(employee);
    }

    let run = PayrollRunner::new(calculator).run(
        &store,
        &employees,
        pay_period,
        request.calculated_by,
    )?;
    Ok(run.into())
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's own message.
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
    ApiErrorResponse::bad_request(error)
}
