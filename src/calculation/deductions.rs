//! Dependent stipends, pre-tax deductions and taxable wages.

use rust_decimal::Decimal;

/// Stipend added to gross pay per dependent.
pub const DEPENDENT_STIPEND: Decimal = Decimal::from_parts(45, 0, 0, false, 0);

/// Pre-tax medical premium per period for single coverage.
pub const MEDICAL_DEDUCTION_SINGLE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Pre-tax medical premium per period for family coverage.
pub const MEDICAL_DEDUCTION_FAMILY: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Taxable wages: gross minus pre-tax deductions, never below zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::taxable_wages;
/// use rust_decimal::Decimal;
///
/// assert_eq!(taxable_wages(Decimal::new(1000, 0), Decimal::new(50, 0)), Decimal::new(950, 0));
/// assert_eq!(taxable_wages(Decimal::new(30, 0), Decimal::new(50, 0)), Decimal::ZERO);
/// ```
pub fn taxable_wages(gross: Decimal, pretax: Decimal) -> Decimal {
    (gross - pretax).max(Decimal::ZERO)
}
