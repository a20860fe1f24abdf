//! Calculation logic for the payroll engine.
//!
//! This module contains the pure payroll core: day detection, the daily
//! overtime split, hours aggregation over a pay period, gross pay, deductions,
//! flat-rate withholdings, monetary rounding, and the payroll calculator that
//! ties them together.

mod daily_overtime;
mod day_detection;
mod deductions;
mod gross_pay;
mod hours_aggregator;
mod money;
mod payroll_calculator;
mod withholding;

pub use daily_overtime::{DEFAULT_DAILY_OVERTIME_THRESHOLD, DailyHoursSplit, split_daily_hours};
pub use day_detection::{DayType, get_day_type, is_business_day};
pub use deductions::{
    DEPENDENT_STIPEND, MEDICAL_DEDUCTION_FAMILY, MEDICAL_DEDUCTION_SINGLE, taxable_wages,
};
pub use gross_pay::{OVERTIME_MULTIPLIER, PAY_PERIODS_PER_YEAR, calculate_earnings};
pub use hours_aggregator::{SALARIED_DAILY_HOURS, aggregate_hours};
pub use money::{MONEY_DECIMAL_PLACES, round_money};
pub use payroll_calculator::{PayrollCalculation, PayrollCalculator};
pub use withholding::{
    FEDERAL_TAX_RATE, MEDICARE_RATE, SOCIAL_SECURITY_RATE, STATE_TAX_RATE, TaxWithholdings,
    calculate_withholdings,
};
