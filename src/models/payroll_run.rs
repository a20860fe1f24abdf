//! Payroll run models.
//!
//! A [`PayrollRun`] groups the [`Paycheck`]s computed for one pay period,
//! along with the employees that had to be skipped.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HoursSummary, PayPeriod, PayrollBreakdown};

/// One employee's computed pay within a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paycheck {
    /// The employee paid.
    pub employee_id: String,
    /// The employee's name in "Last, First" form.
    pub employee_name: String,
    /// The hours the breakdown was computed from.
    pub hours: HoursSummary,
    /// The monetary breakdown.
    pub breakdown: PayrollBreakdown,
}

/// An employee left out of a run, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEmployee {
    /// The employee that was skipped.
    pub employee_id: String,
    /// Why no paycheck was produced.
    pub reason: String,
}

/// A payroll run over one pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayPeriod, PayrollRun};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let run = PayrollRun {
///     id: Uuid::new_v4(),
///     pay_period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
///     },
///     calculated_at: Utc::now(),
///     calculated_by: Some("hr_admin".to_string()),
///     locked: true,
///     paychecks: vec![],
///     skipped: vec![],
/// };
/// assert_eq!(run.total_gross(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for the run.
    pub id: Uuid,
    /// The period the run covers.
    pub pay_period: PayPeriod,
    /// When the run was calculated.
    pub calculated_at: DateTime<Utc>,
    /// Who triggered the run, if known.
    pub calculated_by: Option<String>,
    /// Whether the run and its period's time entries are frozen.
    pub locked: bool,
    /// Paychecks produced by the run.
    pub paychecks: Vec<Paycheck>,
    /// Employees for whom no paycheck could be produced.
    pub skipped: Vec<SkippedEmployee>,
}

impl PayrollRun {
    /// Sum of gross pay across all paychecks.
    pub fn total_gross(&self) -> Decimal {
        self.paychecks.iter().map(|p| p.breakdown.gross).sum()
    }

    /// Sum of net pay across all paychecks.
    pub fn total_net(&self) -> Decimal {
        self.paychecks.iter().map(|p| p.breakdown.net).sum()
    }

    /// Sum of employer-side taxes across all paychecks.
    pub fn total_employer_taxes(&self) -> Decimal {
        self.paychecks
            .iter()
            .map(|p| p.breakdown.employer_taxes())
            .sum()
    }

    /// Finds the paycheck for an employee.
    pub fn paycheck_for(&self, employee_id: &str) -> Option<&Paycheck> {
        self.paychecks.iter().find(|p| p.employee_id == employee_id)
    }
}
