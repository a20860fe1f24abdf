//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed rates table and the structures
//! deserialized from the YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    DEFAULT_DAILY_OVERTIME_THRESHOLD, DEPENDENT_STIPEND, FEDERAL_TAX_RATE, MEDICAL_DEDUCTION_FAMILY,
    MEDICAL_DEDUCTION_SINGLE, MEDICARE_RATE, OVERTIME_MULTIPLIER, PAY_PERIODS_PER_YEAR,
    SALARIED_DAILY_HOURS, SOCIAL_SECURITY_RATE, STATE_TAX_RATE,
};

/// Metadata about the payroll schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollMetadata {
    /// Short code for the schedule (e.g., "US-IN-WEEKLY").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Version of the schedule.
    pub version: String,
}

/// Flat withholding rates applied to taxable wages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRates {
    /// State income tax (employee only).
    pub state: Decimal,
    /// Federal tax (employee and employer).
    pub federal: Decimal,
    /// Social security (employee and employer).
    pub social_security: Decimal,
    /// Medicare (employee and employer).
    pub medicare: Decimal,
}

impl Default for TaxRates {
    fn default() -> Self {
        Self {
            state: STATE_TAX_RATE,
            federal: FEDERAL_TAX_RATE,
            social_security: SOCIAL_SECURITY_RATE,
            medicare: MEDICARE_RATE,
        }
    }
}

/// Rules used to turn time entries into hours and hours into gross pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursRules {
    /// Hours per day before overtime starts (Sunday to Friday).
    pub daily_overtime_threshold: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Hours credited to a salaried employee per Monday-Friday day.
    pub salaried_daily_hours: Decimal,
    /// Divisor turning annual salary into one period's gross pay.
    pub pay_periods_per_year: u32,
}

impl Default for HoursRules {
    fn default() -> Self {
        Self {
            daily_overtime_threshold: DEFAULT_DAILY_OVERTIME_THRESHOLD,
            overtime_multiplier: OVERTIME_MULTIPLIER,
            salaried_daily_hours: SALARIED_DAILY_HOURS,
            pay_periods_per_year: PAY_PERIODS_PER_YEAR,
        }
    }
}

/// Flat per-period amounts added to or deducted from gross pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRates {
    /// Stipend per dependent, added to gross.
    pub dependent_stipend: Decimal,
    /// Pre-tax medical premium for single coverage.
    pub medical_single: Decimal,
    /// Pre-tax medical premium for family coverage.
    pub medical_family: Decimal,
}

impl Default for DeductionRates {
    fn default() -> Self {
        Self {
            dependent_stipend: DEPENDENT_STIPEND,
            medical_single: MEDICAL_DEDUCTION_SINGLE,
            medical_family: MEDICAL_DEDUCTION_FAMILY,
        }
    }
}

/// The complete rates table consumed by the payroll calculator.
///
/// `PayrollRates::default()` holds the standard rates; a YAML rate file can
/// replace them for a given effective date.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollRates;
/// use rust_decimal::Decimal;
///
/// let rates = PayrollRates::default();
/// assert_eq!(rates.taxes.federal, Decimal::new(765, 4));
/// assert_eq!(rates.hours.pay_periods_per_year, 52);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollRates {
    /// Withholding rates.
    pub taxes: TaxRates,
    /// Hours and overtime rules.
    pub hours: HoursRules,
    /// Stipend and deduction amounts.
    pub deductions: DeductionRates,
}

impl PayrollRates {
    /// Checks that every value in the table can be used by the calculator.
    ///
    /// Tax rates must lie in `0..=1`, the daily overtime threshold in
    /// `(0, 24]`, salaried daily hours in `0..=24`, the overtime multiplier
    /// and every deduction must be non-negative, and there must be at least
    /// one pay period per year. The error names the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let day = Decimal::from(24);

        for (name, rate) in [
            ("taxes.state", self.taxes.state),
            ("taxes.federal", self.taxes.federal),
            ("taxes.social_security", self.taxes.social_security),
            ("taxes.medicare", self.taxes.medicare),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(format!("{} must be between 0 and 1 (got {})", name, rate));
            }
        }

        let threshold = self.hours.daily_overtime_threshold;
        if threshold <= Decimal::ZERO || threshold > day {
            return Err(format!(
                "hours.daily_overtime_threshold must be above 0 and at most 24 (got {})",
                threshold
            ));
        }

        let salaried = self.hours.salaried_daily_hours;
        if salaried < Decimal::ZERO || salaried > day {
            return Err(format!(
                "hours.salaried_daily_hours must be between 0 and 24 (got {})",
                salaried
            ));
        }

        if self.hours.pay_periods_per_year == 0 {
            return Err("hours.pay_periods_per_year must be at least 1".to_string());
        }

        for (name, amount) in [
            ("hours.overtime_multiplier", self.hours.overtime_multiplier),
            ("deductions.dependent_stipend", self.deductions.dependent_stipend),
            ("deductions.medical_single", self.deductions.medical_single),
            ("deductions.medical_family", self.deductions.medical_family),
        ] {
            if amount < Decimal::ZERO {
                return Err(format!("{} cannot be negative (got {})", name, amount));
            }
        }

        Ok(())
    }
}

/// A rates table together with the date it takes effect.
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfig {
    /// The first date these rates apply to.
    pub effective_date: NaiveDate,
    /// The rates themselves.
    pub rates: PayrollRates,
}
