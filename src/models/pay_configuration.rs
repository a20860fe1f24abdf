//! Pay configuration model.
//!
//! A [`PayConfiguration`] holds the salary and benefit settings that drive a
//! payroll computation. Exactly one exists per employee; callers are expected
//! to have it on hand before asking the engine for a breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DeductionRates;
use crate::error::{EngineError, EngineResult};

use super::{Employee, PayType};

/// Largest accepted `base_pay`: ten digits, two of them after the point.
pub const MAX_BASE_PAY: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Medical coverage tier, which fixes the pre-tax medical deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicalCoverage {
    /// Employee-only coverage.
    #[default]
    Single,
    /// Employee plus family coverage.
    Family,
}

/// Salary and benefits configuration for one employee.
///
/// `base_pay` is an annual salary for [`PayType::Salary`] and an hourly rate
/// for [`PayType::Hourly`].
///
/// # Example
///
/// ```
/// use payroll_engine::models::{MedicalCoverage, PayConfiguration, PayType};
/// use rust_decimal::Decimal;
///
/// let config = PayConfiguration {
///     pay_type: PayType::Salary,
///     base_pay: Decimal::new(52000, 0),
///     dependents: 2,
///     medical_coverage: MedicalCoverage::Family,
/// };
/// assert_eq!(config.base_pay, Decimal::new(52000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayConfiguration {
    /// The pay type this configuration was set up for.
    pub pay_type: PayType,
    /// Annual salary or hourly rate depending on `pay_type`.
    pub base_pay: Decimal,
    /// Number of dependents receiving a stipend.
    #[serde(default)]
    pub dependents: u32,
    /// Medical coverage tier.
    #[serde(default)]
    pub medical_coverage: MedicalCoverage,
}

impl PayConfiguration {
    /// Checks that this configuration can be used to pay `employee`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::PayTypeMismatch`] if the configured pay type differs
    ///   from the employee's declared pay type.
    /// - [`EngineError::InvalidConfiguration`] if `base_pay` is negative or
    ///   above [`MAX_BASE_PAY`].
    pub fn validate_for(&self, employee: &Employee) -> EngineResult<()> {
        if self.pay_type != employee.pay_type {
            return Err(EngineError::PayTypeMismatch {
                employee_id: employee.id.clone(),
                employee_pay_type: employee.pay_type,
                configured_pay_type: self.pay_type,
            });
        }

        if self.base_pay < Decimal::ZERO {
            return Err(EngineError::InvalidConfiguration {
                employee_id: employee.id.clone(),
                message: format!("base pay cannot be negative (got {})", self.base_pay),
            });
        }

        if self.base_pay > MAX_BASE_PAY {
            return Err(EngineError::InvalidConfiguration {
                employee_id: employee.id.clone(),
                message: format!(
                    "base pay cannot exceed {} (got {})",
                    MAX_BASE_PAY, self.base_pay
                ),
            });
        }

        Ok(())
    }

    /// The flat pre-tax medical deduction for this coverage tier.
    pub fn medical_deduction(&self, rates: &DeductionRates) -> Decimal {
        match self.medical_coverage {
            MedicalCoverage::Single => rates.medical_single,
            MedicalCoverage::Family => rates.medical_family,
        }
    }

    /// The stipend added to gross pay for this configuration's dependents.
    pub fn dependent_stipend(&self, rates: &DeductionRates) -> Decimal {
        rates.dependent_stipend * Decimal::from(self.dependents)
    }
}
