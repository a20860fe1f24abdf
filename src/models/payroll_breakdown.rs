//! Payroll breakdown models.
//!
//! This module contains the [`HoursSummary`] produced by the hours aggregator
//! and the [`PayrollBreakdown`] produced by the payroll calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours totals for one employee over one pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::HoursSummary;
/// use rust_decimal::Decimal;
///
/// let hours = HoursSummary {
///     regular_hours: Decimal::new(40, 0),
///     overtime_hours: Decimal::new(2, 0),
///     pto_hours: Decimal::ZERO,
/// };
/// assert_eq!(hours.paid_hours(), Decimal::new(42, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoursSummary {
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime multiplier.
    pub overtime_hours: Decimal,
    /// Paid time off. Reported only; does not affect pay.
    pub pto_hours: Decimal,
}

impl HoursSummary {
    /// Regular plus overtime hours.
    pub fn paid_hours(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }
}

/// The monetary result of one payroll computation.
///
/// Every field is rounded half-up to 2 decimal places. Employer-side taxes are
/// reporting figures and are not part of `net`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Gross pay, including dependent stipends.
    pub gross: Decimal,
    /// Pre-tax deductions (the flat medical premium).
    pub pretax: Decimal,
    /// Taxable wages: gross minus pre-tax, floored at zero.
    pub taxable: Decimal,
    /// State income tax withheld from the employee.
    pub state_employee: Decimal,
    /// Federal tax withheld from the employee.
    pub federal_employee: Decimal,
    /// Social security withheld from the employee.
    pub social_security_employee: Decimal,
    /// Medicare withheld from the employee.
    pub medicare_employee: Decimal,
    /// Federal tax owed by the employer.
    pub federal_employer: Decimal,
    /// Social security owed by the employer.
    pub social_security_employer: Decimal,
    /// Medicare owed by the employer.
    pub medicare_employer: Decimal,
    /// Net pay: gross minus pre-tax minus employee taxes.
    pub net: Decimal,
}

impl PayrollBreakdown {
    /// Sum of the four employee-side tax fields.
    pub fn employee_taxes(&self) -> Decimal {
        self.state_employee
            + self.federal_employee
            + self.social_security_employee
            + self.medicare_employee
    }

    /// Sum of the three employer-side tax fields.
    pub fn employer_taxes(&self) -> Decimal {
        self.federal_employer + self.social_security_employer + self.medicare_employer
    }
}
