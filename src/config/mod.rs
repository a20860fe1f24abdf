//! Configuration loading and management for the payroll engine.
//!
//! This module provides the explicit rates table ([`PayrollRates`]) and the
//! functionality to load effective-dated rate tables from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Loaded schedule: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DeductionRates, HoursRules, PayrollMetadata, PayrollRates, RateConfig, TaxRates};
