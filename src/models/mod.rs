//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod pay_configuration;
mod pay_period;
mod payroll_breakdown;
mod payroll_run;
mod time_entry;

pub use employee::{Employee, EmployeeStatus, PayType};
pub use pay_configuration::{MAX_BASE_PAY, MedicalCoverage, PayConfiguration};
pub use pay_period::PayPeriod;
pub use payroll_breakdown::{HoursSummary, PayrollBreakdown};
pub use payroll_run::{Paycheck, PayrollRun, SkippedEmployee};
pub use time_entry::{
    EntriesByDate, MAX_DAILY_HOURS, MAX_SALARIED_DAILY_PTO, TimeEntry, index_entries_by_date,
};
