//! Application state for the payroll engine API.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::calculation::PayrollCalculator;
use crate::config::ConfigLoader;
use crate::error::EngineResult;

/// Shared application state.
///
/// Holds the loaded rate tables; every request resolves its own rates from
/// them by pay period start date.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Builds a calculator for the rates effective on `date`.
    pub fn calculator_for(&self, date: NaiveDate) -> EngineResult<PayrollCalculator> {
        self.config.rates_for(date).map(PayrollCalculator::new)
    }
}
