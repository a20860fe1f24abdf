//! Time entry model.
//!
//! A [`TimeEntry`] records the hours an employee worked and the PTO they took
//! on one calendar day. The engine consumes entries as a sparse map keyed by
//! work date ([`EntriesByDate`]).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::PayType;

/// Maximum hours that can be recorded against a single day.
pub const MAX_DAILY_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Maximum PTO a salaried employee can record against a single day.
pub const MAX_SALARIED_DAILY_PTO: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Sparse mapping from work date to the entry recorded on that date.
pub type EntriesByDate = BTreeMap<NaiveDate, TimeEntry>;

/// Hours recorded by one employee on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// The employee who recorded the entry.
    pub employee_id: String,
    /// The calendar day the entry applies to.
    pub work_date: NaiveDate,
    /// Hours worked on the day.
    #[serde(default)]
    pub hours_worked: Decimal,
    /// Paid time off taken on the day.
    #[serde(default)]
    pub pto_hours: Decimal,
    /// Whether the owner has submitted the entry.
    #[serde(default)]
    pub submitted: bool,
    /// Set once the entry's period has been through a payroll run.
    #[serde(default)]
    pub locked: bool,
}

impl TimeEntry {
    /// Creates an unsubmitted, unlocked entry.
    pub fn new(
        employee_id: impl Into<String>,
        work_date: NaiveDate,
        hours_worked: Decimal,
        pto_hours: Decimal,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            work_date,
            hours_worked,
            pto_hours,
            submitted: false,
            locked: false,
        }
    }

    /// Checks the entry against the recording rules for `pay_type`.
    ///
    /// - Hours worked and PTO hours cannot be negative.
    /// - Hours worked cannot exceed 24.
    /// - Salaried employees record PTO only, at most 8 hours per day.
    /// - Hourly employees cannot record more than 24 hours worked plus PTO.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{PayType, TimeEntry};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let entry = TimeEntry::new(
    ///     "E1001",
    ///     NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
    ///     Decimal::new(10, 0),
    ///     Decimal::ZERO,
    /// );
    /// assert!(entry.validate(PayType::Hourly).is_ok());
    /// assert!(entry.validate(PayType::Salary).is_err());
    /// ```
    pub fn validate(&self, pay_type: PayType) -> EngineResult<()> {
        if self.hours_worked < Decimal::ZERO || self.pto_hours < Decimal::ZERO {
            return Err(self.invalid("hours cannot be negative"));
        }

        if self.hours_worked > MAX_DAILY_HOURS {
            return Err(self.invalid("hours worked cannot exceed 24 in a day"));
        }

        match pay_type {
            PayType::Salary => {
                if !self.hours_worked.is_zero() {
                    return Err(
                        self.invalid("salaried employees record PTO only, not hours worked")
                    );
                }
                if self.pto_hours > MAX_SALARIED_DAILY_PTO {
                    return Err(self.invalid("PTO hours cannot exceed 8 in a day"));
                }
            }
            PayType::Hourly => {
                if self.hours_worked + self.pto_hours > MAX_DAILY_HOURS {
                    return Err(self.invalid("hours worked plus PTO cannot exceed 24 in a day"));
                }
            }
        }

        Ok(())
    }

    /// Fails with [`EngineError::TimeEntryLocked`] if the entry can no longer
    /// be changed by its owner.
    pub fn ensure_editable(&self) -> EngineResult<()> {
        if self.locked {
            return Err(EngineError::TimeEntryLocked {
                employee_id: self.employee_id.clone(),
                date: self.work_date,
            });
        }
        Ok(())
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidTimeEntry {
            employee_id: self.employee_id.clone(),
            date: self.work_date,
            message: message.to_string(),
        }
    }
}

/// Builds the date-keyed entry map the hours aggregator consumes.
///
/// # Errors
///
/// Returns [`EngineError::DuplicateTimeEntry`] if two entries share a work date.
pub fn index_entries_by_date<I>(entries: I) -> EngineResult<EntriesByDate>
where
    I: IntoIterator<Item = TimeEntry>,
{
    let mut by_date = EntriesByDate::new();
    for entry in entries {
        if by_date.contains_key(&entry.work_date) {
            return Err(EngineError::DuplicateTimeEntry {
                employee_id: entry.employee_id,
                date: entry.work_date,
            });
        }
        by_date.insert(entry.work_date, entry);
    }
    Ok(by_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn entry(hours: &str, pto: &str) -> TimeEntry {
        TimeEntry::new("E1001", make_date("2026-01-13"), dec(hours), dec(pto))
    }

    #[test]
    fn test_hourly_entry_within_limits_is_valid() {
        assert!(entry("9.5", "0").validate(PayType::Hourly).is_ok());
    }

    #[test]
    fn test_negative_hours_rejected() {
        assert!(entry("-1", "0").validate(PayType::Hourly).is_err());
        assert!(entry("0", "-2").validate(PayType::Salary).is_err());
    }

    #[test]
    fn test_hours_over_24_rejected() {
        let result = entry("24.5", "0").validate(PayType::Hourly);
        match result {
            Err(EngineError::InvalidTimeEntry { message, .. }) => {
                assert!(message.contains("24"));
            }
            other => panic!("Expected InvalidTimeEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_hourly_worked_plus_pto_over_24_rejected() {
        assert!(entry("20", "5").validate(PayType::Hourly).is_err());
        assert!(entry("16", "8").validate(PayType::Hourly).is_ok());
    }

    #[test]
    fn test_salaried_worked_hours_rejected() {
        assert!(entry("8", "0").validate(PayType::Salary).is_err());
    }

    #[test]
    fn test_salaried_pto_capped_at_8() {
        assert!(entry("0", "8").validate(PayType::Salary).is_ok());
        assert!(entry("0", "8.5").validate(PayType::Salary).is_err());
    }

    #[test]
    fn test_locked_entry_is_not_editable() {
        let mut e = entry("8", "0");
        assert!(e.ensure_editable().is_ok());

        e.locked = true;
        assert!(matches!(
            e.ensure_editable(),
            Err(EngineError::TimeEntryLocked { .. })
        ));
    }

    #[test]
    fn test_index_entries_by_date() {
        let entries = vec![
            TimeEntry::new("E1001", make_date("2026-01-14"), dec("8"), dec("0")),
            TimeEntry::new("E1001", make_date("2026-01-13"), dec("6"), dec("2")),
        ];

        let by_date = index_entries_by_date(entries).unwrap();
        assert_eq!(by_date.len(), 2);
        assert_eq!(by_date[&make_date("2026-01-13")].pto_hours, dec("2"));
        // BTreeMap iterates in ascending date order
        let dates: Vec<_> = by_date.keys().copied().collect();
        assert_eq!(dates, vec![make_date("2026-01-13"), make_date("2026-01-14")]);
    }

    #[test]
    fn test_index_entries_rejects_duplicate_dates() {
        let entries = vec![
            TimeEntry::new("E1001", make_date("2026-01-13"), dec("8"), dec("0")),
            TimeEntry::new("E1001", make_date("2026-01-13"), dec("2"), dec("0")),
        ];

        match index_entries_by_date(entries) {
            Err(EngineError::DuplicateTimeEntry { employee_id, date }) => {
                assert_eq!(employee_id, "E1001");
                assert_eq!(date, make_date("2026-01-13"));
            }
            other => panic!("Expected DuplicateTimeEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_entry_with_defaults() {
        let json = r#"{
            "employee_id": "E1001",
            "work_date": "2026-01-13",
            "hours_worked": "7.5"
        }"#;

        let e: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.hours_worked, dec("7.5"));
        assert_eq!(e.pto_hours, Decimal::ZERO);
        assert!(!e.locked);
        assert!(!e.submitted);
    }
}
