//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type: the inclusive calendar-date
//! range over which hours are aggregated and one breakdown is computed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents an inclusive pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(period.day_count(), 7);
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a pay period, rejecting a start date after the end date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] if `start_date > end_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        let period = Self {
            start_date,
            end_date,
        };
        period.validate()?;
        Ok(period)
    }

    /// Checks the range ordering of a period built field-by-field
    /// (e.g., deserialized from a request).
    pub fn validate(&self) -> EngineResult<()> {
        if self.start_date > self.end_date {
            return Err(EngineError::InvalidRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Checks if a given date falls within this pay period (inclusive).
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
    /// };
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap())); // end date
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 19).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Iterates every calendar day in the period once, in ascending order.
    ///
    /// Yields nothing when the start date is after the end date.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |d| *d <= end)
    }

    /// Number of calendar days in the period; zero for an inverted range.
    pub fn day_count(&self) -> i64 {
        if self.start_date > self.end_date {
            return 0;
        }
        (self.end_date - self.start_date).num_days() + 1
    }
}
