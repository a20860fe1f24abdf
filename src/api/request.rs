//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/payroll-runs` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{
    Employee, EmployeeStatus, EntriesByDate, PayConfiguration, PayPeriod, PayType, TimeEntry,
    index_entries_by_date,
};

/// Request body for the `/calculate` endpoint.
///
/// Contains everything needed to compute one employee's breakdown for one
/// pay period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee being paid.
    pub employee: EmployeeRequest,
    /// The employee's pay configuration. Omitting it is reported as a
    /// missing configuration, not a malformed request.
    #[serde(default)]
    pub pay_configuration: Option<PayConfiguration>,
    /// The pay period for the calculation.
    pub pay_period: PayPeriodRequest,
    /// Time entries recorded by the employee. Days without an entry count as
    /// zero hours.
    #[serde(default)]
    pub time_entries: Vec<TimeEntryRequest>,
}

/// Request body for the `/payroll-runs` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunRequest {
    /// The pay period for the run.
    pub pay_period: PayPeriodRequest,
    /// Who is triggering the run.
    #[serde(default)]
    pub calculated_by: Option<String>,
    /// The roster, each employee with their configuration and entries.
    pub employees: Vec<RosterEntryRequest>,
}

/// One employee in a payroll run request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntryRequest {
    /// The employee record.
    pub employee: EmployeeRequest,
    /// The employee's pay configuration, if one is on file.
    #[serde(default)]
    pub pay_configuration: Option<PayConfiguration>,
    /// Time entries recorded by the employee.
    #[serde(default)]
    pub time_entries: Vec<TimeEntryRequest>,
}

/// Employee information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// How the employee is paid.
    pub pay_type: PayType,
    /// Employment status; defaults to active.
    #[serde(default)]
    pub status: EmployeeStatus,
}

/// Pay period information in a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

/// A single day's time entry in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryRequest {
    /// The day the hours were recorded for.
    pub work_date: NaiveDate,
    /// Hours worked on the day.
    #[serde(default)]
    pub hours_worked: Decimal,
    /// Paid time off taken on the day.
    #[serde(default)]
    pub pto_hours: Decimal,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            pay_type: req.pay_type,
            status: req.status,
        }
    }
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl TimeEntryRequest {
    /// Converts into a domain entry owned by `employee_id`.
    pub fn into_time_entry(self, employee_id: &str) -> TimeEntry {
        TimeEntry::new(employee_id, self.work_date, self.hours_worked, self.pto_hours)
    }
}

/// Validates an employee's submitted entries and builds the date-keyed map.
///
/// # Errors
///
/// - [`crate::error::EngineError::InvalidTimeEntry`] if an entry breaks the
///   recording rules for the employee's pay type.
/// - [`crate::error::EngineError::DuplicateTimeEntry`] if two entries share a
///   work date.
pub(crate) fn index_request_entries(
    employee: &Employee,
    entries: Vec<TimeEntryRequest>,
) -> EngineResult<EntriesByDate> {
    let entries = entries
        .into_iter()
        .map(|entry| {
            let entry = entry.into_time_entry(&employee.id);
            entry.validate(employee.pay_type)?;
            Ok(entry)
        })
        .collect::<EngineResult<Vec<_>>>()?;

    index_entries_by_date(entries)
}
