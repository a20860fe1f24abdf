//! Gross pay calculation.

use rust_decimal::Decimal;

use crate::config::HoursRules;
use crate::models::{HoursSummary, PayType};

/// Multiplier applied to the hourly rate for overtime hours.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Number of pay periods an annual salary is divided into.
///
/// Salaried gross pay is always annual / 52, whatever the length of the
/// requested period.
pub const PAY_PERIODS_PER_YEAR: u32 = 52;

/// Calculates gross pay before dependent stipends.
///
/// - **Salary**: `base_pay / pay_periods_per_year` (base pay is annual).
/// - **Hourly**: `regular × rate + overtime × rate × overtime_multiplier`.
///
/// The result is unrounded.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_earnings;
/// use payroll_engine::config::HoursRules;
/// use payroll_engine::models::{HoursSummary, PayType};
/// use rust_decimal::Decimal;
///
/// let hours = HoursSummary {
///     regular_hours: Decimal::new(8, 0),
///     overtime_hours: Decimal::new(2, 0),
///     pto_hours: Decimal::ZERO,
/// };
/// let gross = calculate_earnings(PayType::Hourly, Decimal::new(20, 0), &hours, &HoursRules::default());
/// assert_eq!(gross, Decimal::new(220, 0));
/// ```
pub fn calculate_earnings(
    pay_type: PayType,
    base_pay: Decimal,
    hours: &HoursSummary,
    rules: &HoursRules,
) -> Decimal {
    match pay_type {
        PayType::Salary => base_pay / Decimal::from(rules.pay_periods_per_year),
        PayType::Hourly => {
            hours.regular_hours * base_pay
                + hours.overtime_hours * base_pay * rules.overtime_multiplier
        }
    }
}
