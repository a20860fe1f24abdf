//! Payroll calculation for one employee and one pay period.
//!
//! The calculator turns aggregated hours and a pay configuration into a full
//! [`PayrollBreakdown`]: gross pay, pre-tax deductions, taxable wages, the
//! seven tax figures and net pay. All intermediate arithmetic runs at full
//! decimal precision; only the returned fields are rounded.

use serde::{Deserialize, Serialize};

use crate::config::PayrollRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    EntriesByDate, Employee, HoursSummary, PayConfiguration, PayPeriod, PayrollBreakdown,
};

use super::{aggregate_hours, calculate_earnings, calculate_withholdings, round_money, taxable_wages};

/// Hours and breakdown from one computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    /// The aggregated hours the breakdown was computed from.
    pub hours: HoursSummary,
    /// The rounded monetary breakdown.
    pub breakdown: PayrollBreakdown,
}

/// Computes payroll breakdowns against a fixed rates table.
///
/// The calculator is a pure function of its inputs: it performs no I/O and
/// holds no mutable state, so one instance can be shared across threads.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollCalculator;
/// use payroll_engine::models::{
///     Employee, EmployeeStatus, EntriesByDate, MedicalCoverage, PayConfiguration, PayPeriod, PayType,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     id: "E1001".to_string(),
///     first_name: "Ada".to_string(),
///     last_name: "Lovelace".to_string(),
///     pay_type: PayType::Salary,
///     status: EmployeeStatus::Active,
/// };
/// let config = PayConfiguration {
///     pay_type: PayType::Salary,
///     base_pay: Decimal::new(52000, 0),
///     dependents: 0,
///     medical_coverage: MedicalCoverage::Single,
/// };
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// )
/// .unwrap();
///
/// let breakdown = PayrollCalculator::default()
///     .compute(&employee, Some(&config), &period, &EntriesByDate::new())
///     .unwrap();
///
/// assert_eq!(breakdown.gross, Decimal::from_str("1000.00").unwrap());
/// assert_eq!(breakdown.federal_employee, Decimal::from_str("72.68").unwrap());
/// assert_eq!(breakdown.net, Decimal::from_str("774.73").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayrollCalculator {
    rates: PayrollRates,
}

impl PayrollCalculator {
    /// Creates a calculator for the given rates table.
    pub fn new(rates: PayrollRates) -> Self {
        Self { rates }
    }

    /// Returns the rates table in use.
    pub fn rates(&self) -> &PayrollRates {
        &self.rates
    }

    /// Computes the breakdown for one employee over one period.
    ///
    /// See [`PayrollCalculator::compute_detailed`] for the steps and errors.
    pub fn compute(
        &self,
        employee: &Employee,
        configuration: Option<&PayConfiguration>,
        period: &PayPeriod,
        entries: &EntriesByDate,
    ) -> EngineResult<PayrollBreakdown> {
        self.compute_detailed(employee, configuration, period, entries)
            .map(|calculation| calculation.breakdown)
    }

    /// Computes hours and breakdown for one employee over one period.
    ///
    /// Steps, in order:
    /// 1. Aggregate hours for the employee's pay type.
    /// 2. Gross pay: annual salary / 52, or regular and overtime hours at the
    ///    hourly rate (overtime at 1.5x).
    /// 3. Add the dependent stipend to gross.
    /// 4. Pre-tax deduction: the flat medical premium for the coverage tier.
    /// 5. Taxable wages: gross minus pre-tax, floored at zero.
    /// 6. Employee taxes on taxable wages, mirrored on the employer side.
    /// 7. Net: gross minus pre-tax minus employee taxes (may be negative).
    /// 8. Round every monetary field half-up to cents.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingConfiguration`] if `configuration` is `None`.
    /// - [`EngineError::InvalidRange`] if the period starts after it ends.
    /// - [`EngineError::PayTypeMismatch`] / [`EngineError::InvalidConfiguration`]
    ///   if the configuration cannot be used for this employee.
    pub fn compute_detailed(
        &self,
        employee: &Employee,
        configuration: Option<&PayConfiguration>,
        period: &PayPeriod,
        entries: &EntriesByDate,
    ) -> EngineResult<PayrollCalculation> {
        let configuration = configuration.ok_or_else(|| EngineError::MissingConfiguration {
            employee_id: employee.id.clone(),
        })?;
        period.validate()?;
        configuration.validate_for(employee)?;

        let rates = &self.rates;
        let hours = aggregate_hours(employee.pay_type, entries, period, &rates.hours);

        let gross = calculate_earnings(
            employee.pay_type,
            configuration.base_pay,
            &hours,
            &rates.hours,
        ) + configuration.dependent_stipend(&rates.deductions);

        let pretax = configuration.medical_deduction(&rates.deductions);
        let taxable = taxable_wages(gross, pretax);
        let taxes = calculate_withholdings(taxable, &rates.taxes);
        let net = gross - pretax - taxes.employee_total();

        let breakdown = PayrollBreakdown {
            gross: round_money(gross),
            pretax: round_money(pretax),
            taxable: round_money(taxable),
            state_employee: round_money(taxes.state_employee),
            federal_employee: round_money(taxes.federal_employee),
            social_security_employee: round_money(taxes.social_security_employee),
            medicare_employee: round_money(taxes.medicare_employee),
            federal_employer: round_money(taxes.federal_employer),
            social_security_employer: round_money(taxes.social_security_employer),
            medicare_employer: round_money(taxes.medicare_employer),
            net: round_money(net),
        };

        Ok(PayrollCalculation { hours, breakdown })
    }
}
