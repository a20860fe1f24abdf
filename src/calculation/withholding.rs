//! Tax withholding at flat rates.
//!
//! Employee-side withholdings cover state, federal, social security and
//! medicare. The employer side mirrors federal, social security and medicare
//! at the same rates; there is no employer state tax.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TaxRates;

/// State income tax rate.
pub const STATE_TAX_RATE: Decimal = Decimal::from_parts(315, 0, 0, false, 4);

/// Federal tax rate.
pub const FEDERAL_TAX_RATE: Decimal = Decimal::from_parts(765, 0, 0, false, 4);

/// Social security rate.
pub const SOCIAL_SECURITY_RATE: Decimal = Decimal::from_parts(62, 0, 0, false, 3);

/// Medicare rate.
pub const MEDICARE_RATE: Decimal = Decimal::from_parts(145, 0, 0, false, 4);

/// Unrounded tax amounts for one taxable-wage figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxWithholdings {
    /// State tax withheld from the employee.
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
}

impl TaxWithholdings {
    /// Total withheld from the employee. This is the only tax figure that
    /// reduces net pay.
    pub fn employee_total(&self) -> Decimal {
        self.state_employee
            + self.federal_employee
            + self.social_security_employee
            + self.medicare_employee
    }
}

/// Applies the flat rates to `taxable` wages.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_withholdings;
/// use payroll_engine::config::TaxRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let taxes = calculate_withholdings(Decimal::new(950, 0), &TaxRates::default());
/// assert_eq!(taxes.federal_employee, Decimal::from_str("72.675").unwrap());
/// assert_eq!(taxes.federal_employer, taxes.federal_employee);
/// ```
pub fn calculate_withholdings(taxable: Decimal, rates: &TaxRates) -> TaxWithholdings {
    let federal = taxable * rates.federal;
    let social_security = taxable * rates.social_security;
    let medicare = taxable * rates.medicare;

    TaxWithholdings {
        state_employee: taxable * rates.state,
        federal_employee: federal,
        social_security_employee: social_security,
        medicare_employee: medicare,
        federal_employer: federal,
        social_security_employer: social_security,
        medicare_employer: medicare,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rate_constants() {
        assert_eq!(STATE_TAX_RATE, dec("0.0315"));
        assert_eq!(FEDERAL_TAX_RATE, dec("0.0765"));
        assert_eq!(SOCIAL_SECURITY_RATE, dec("0.062"));
        assert_eq!(MEDICARE_RATE, dec("0.0145"));
    }

    #[test]
    fn test_withholdings_on_950() {
        let taxes = calculate_withholdings(dec("950"), &TaxRates::default());
        assert_eq!(taxes.state_employee, dec("29.925"));
        assert_eq!(taxes.federal_employee, dec("72.675"));
        assert_eq!(taxes.social_security_employee, dec("58.9"));
        assert_eq!(taxes.medicare_employee, dec("13.775"));
        assert_eq!(taxes.employee_total(), dec("175.275"));
    }

    #[test]
    fn test_employer_side_mirrors_employee_side() {
        let taxes = calculate_withholdings(dec("1234.56"), &TaxRates::default());
        assert_eq!(taxes.federal_employer, taxes.federal_employee);
        assert_eq!(taxes.social_security_employer, taxes.social_security_employee);
        assert_eq!(taxes.medicare_employer, taxes.medicare_employee);
    }

    #[test]
    fn test_zero_taxable_means_zero_taxes() {
        let taxes = calculate_withholdings(Decimal::ZERO, &TaxRates::default());
        assert_eq!(taxes.employee_total(), Decimal::ZERO);
        assert_eq!(taxes.federal_employer, Decimal::ZERO);
    }

    #[test]
    fn test_custom_rates() {
        let rates = TaxRates {
            state: dec("0.05"),
            ..TaxRates::default()
        };
        let taxes = calculate_withholdings(dec("100"), &rates);
        assert_eq!(taxes.state_employee, dec("5"));
    }
}
