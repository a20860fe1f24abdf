//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can surface to its caller.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::PayType;

/// The main error type for the payroll engine.
///
/// A computation either fully succeeds or fails with one of these variants;
/// no partial breakdown is ever returned alongside an error.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::MissingConfiguration {
///     employee_id: "E1001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee 'E1001' has no pay configuration");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No rates table is effective on the requested date.
    #[error("No payroll rates effective on {date}")]
    RatesNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },

    /// The employee has no pay configuration, so nothing can be computed.
    #[error("Employee '{employee_id}' has no pay configuration")]
    MissingConfiguration {
        /// The employee without a configuration.
        employee_id: String,
    },

    /// The pay period starts after it ends.
    #[error("Invalid pay period: start {start} is after end {end}")]
    InvalidRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// The pay configuration disagrees with the employee's declared pay type.
    #[error(
        "Pay type mismatch for employee '{employee_id}': employee is {employee_pay_type}, configuration is {configured_pay_type}"
    )]
    PayTypeMismatch {
        /// The employee whose records disagree.
        employee_id: String,
        /// The pay type declared on the employee record.
        employee_pay_type: PayType,
        /// The pay type declared on the pay configuration.
        configured_pay_type: PayType,
    },

    /// The pay configuration holds an impossible value.
    #[error("Invalid pay configuration for employee '{employee_id}': {message}")]
    InvalidConfiguration {
        /// The employee the configuration belongs to.
        employee_id: String,
        /// A description of what made the configuration invalid.
        message: String,
    },

    /// A time entry broke one of the entry rules.
    #[error("Invalid time entry for employee '{employee_id}' on {date}: {message}")]
    InvalidTimeEntry {
        /// The employee the entry belongs to.
        employee_id: String,
        /// The work date of the entry.
        date: NaiveDate,
        /// A description of the broken rule.
        message: String,
    },

    /// More than one time entry was supplied for the same day.
    #[error("Duplicate time entry for employee '{employee_id}' on {date}")]
    DuplicateTimeEntry {
        /// The employee the entries belong to.
        employee_id: String,
        /// The repeated work date.
        date: NaiveDate,
    },

    /// The time entry belongs to an already calculated period.
    #[error("Time entry for employee '{employee_id}' on {date} is locked")]
    TimeEntryLocked {
        /// The employee the entry belongs to.
        employee_id: String,
        /// The work date of the entry.
        date: NaiveDate,
    },

    /// The same employee appears more than once in a roster.
    #[error("Employee '{employee_id}' appears more than once in the roster")]
    DuplicateEmployee {
        /// The repeated employee id.
        employee_id: String,
    },

    /// A payroll run stopped after some paychecks were already recorded.
    ///
    /// `run_id` is the id those paychecks were recorded under.
    #[error("Payroll run {run_id} aborted after {recorded} recorded paychecks: {source}")]
    RunAborted {
        /// The id of the partially recorded run.
        run_id: Uuid,
        /// How many paychecks were recorded before the failure.
        recorded: usize,
        /// The failure that stopped the run.
        #[source]
        source: Box<EngineError>,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
