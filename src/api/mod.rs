//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for computing a single
//! employee's payroll breakdown and for running payroll over a roster.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalculationRequest, EmployeeRequest, PayPeriodRequest, PayrollRunRequest, RosterEntryRequest,
    TimeEntryRequest,
};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, PayrollRunResponse};
pub use state::AppState;
