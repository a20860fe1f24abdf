//! Payroll Calculation Engine
//!
//! This crate computes per-employee payroll for a pay period: it aggregates
//! daily time entries into regular, overtime and PTO hours, then derives gross
//! pay, pre-tax deductions, taxable wages, flat-rate withholdings on both the
//! employee and employer side, and net pay. A payroll run orchestrator and an
//! HTTP surface sit on top of the pure calculation core.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod store;
