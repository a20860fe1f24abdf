//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! rates from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollMetadata, PayrollRates, RateConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// ├── payroll.yaml        # Schedule metadata
/// └── rates/
///     └── 2025-01-01.yaml  # Rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// let rates = loader
///     .rates_for(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())
///     .unwrap();
/// println!("Federal rate: {}", rates.taxes.federal);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: PayrollMetadata,
    /// Sorted oldest first.
    rates: Vec<RateConfig>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if `payroll.yaml` or the `rates`
    ///   directory is missing, or the directory holds no rate files.
    /// - [`EngineError::ConfigParseError`] if any file contains invalid YAML,
    ///   is missing a required field, or holds a rates table that fails
    ///   [`PayrollRates::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PayrollMetadata>(&path.join("payroll.yaml"))?;
        let rates = Self::load_rates(&path.join("rates"))?;

        Ok(Self::from_parts(metadata, rates))
    }

    /// Builds a loader in-process from a single rates table.
    ///
    /// The table is trusted as given; call [`PayrollRates::validate`] first
    /// when it comes from outside the process.
    pub fn from_rates(
        metadata: PayrollMetadata,
        effective_date: NaiveDate,
        rates: PayrollRates,
    ) -> Self {
        Self::from_parts(
            metadata,
            vec![RateConfig {
                effective_date,
                rates,
            }],
        )
    }

    fn from_parts(metadata: PayrollMetadata, mut rates: Vec<RateConfig>) -> Self {
        rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self { metadata, rates }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateConfig>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let config = Self::load_yaml::<RateConfig>(&path)?;
                config
                    .rates
                    .validate()
                    .map_err(|message| EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message,
                    })?;
                rates.push(config);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        &self.metadata
    }

    /// Returns every rate configuration, oldest first.
    pub fn rate_configs(&self) -> &[RateConfig] {
        &self.rates
    }

    /// Gets the rates table effective on `date`.
    ///
    /// Picks the most recent rate configuration whose effective date is on or
    /// before `date`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RatesNotFound`] if every configuration takes
    /// effect after `date`.
    pub fn rates_for(&self, date: NaiveDate) -> EngineResult<PayrollRates> {
        self.rates
            .iter()
            .rev()
            .find(|rc| rc.effective_date <= date)
            .map(|rc| rc.rates)
            .ok_or(EngineError::RatesNotFound { date })
    }
}
