//! Employee model and related types.
//!
//! This module defines the Employee struct together with the PayType and
//! EmployeeStatus enums used to decide who is paid and by which rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How an employee is paid.
///
/// Determines which hours rules and which gross-pay formula apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    /// Paid an annual salary; Monday to Friday are paid automatically.
    Salary,
    /// Paid an hourly rate for recorded hours.
    Hourly,
}

impl fmt::Display for PayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayType::Salary => write!(f, "salary"),
            PayType::Hourly => write!(f, "hourly"),
        }
    }
}

/// Employment status. Only active employees are included in a payroll run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed.
    #[default]
    Active,
    /// No longer employed.
    Terminated,
}

/// Represents an employee whose pay is calculated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier (e.g., "E1001").
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// The declared pay type of the employee.
    pub pay_type: PayType,
    /// Employment status.
    #[serde(default)]
    pub status: EmployeeStatus,
}

impl Employee {
    /// Returns true if the employee is currently active.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmployeeStatus, PayType};
    ///
    /// let employee = Employee {
    ///     id: "E1001".to_string(),
    ///     first_name: "Ada".to_string(),
    ///     last_name: "Lovelace".to_string(),
    ///     pay_type: PayType::Salary,
    ///     status: EmployeeStatus::Active,
    /// };
    /// assert!(employee.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Returns the name in "Last, First" form used on paychecks.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}
