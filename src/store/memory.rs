//! In-memory store backing the HTTP surface and tests.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{PayConfiguration, PayPeriod, Paycheck, TimeEntry};

use super::{PayConfigurationSource, PaycheckSink, TimeEntryLock, TimeEntrySource};

/// A process-local store implementing every collaborator trait.
///
/// Entries are keyed by employee id and work date, so saving an entry for a
/// day that already has one replaces it unless the existing entry is locked.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayPeriod, TimeEntry};
/// use payroll_engine::store::{InMemoryStore, TimeEntryLock, TimeEntrySource};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let store = InMemoryStore::new();
/// store
///     .save_time_entry(TimeEntry::new("E1001", monday, Decimal::new(8, 0), Decimal::ZERO))
///     .unwrap();
///
/// let period = PayPeriod::new(monday, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()).unwrap();
/// assert_eq!(store.lock_entries(&period).unwrap(), 1);
/// assert!(store.entries_for("E1001", &period).unwrap()[0].locked);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    configurations: RwLock<HashMap<String, PayConfiguration>>,
    time_entries: RwLock<Vec<TimeEntry>>,
    paychecks: RwLock<Vec<(Uuid, Paycheck)>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pay configuration for an employee, replacing any earlier one.
    pub fn set_pay_configuration(
        &self,
        employee_id: impl Into<String>,
        configuration: PayConfiguration,
    ) {
        write(&self.configurations).insert(employee_id.into(), configuration);
    }

    /// Saves a time entry, replacing the employee's entry for the same day.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::TimeEntryLocked`] if the existing
    /// entry for that day has been locked by a payroll run.
    pub fn save_time_entry(&self, entry: TimeEntry) -> EngineResult<()> {
        let mut entries = write(&self.time_entries);
        let existing = entries
            .iter()
            .position(|e| e.employee_id == entry.employee_id && e.work_date == entry.work_date);

        match existing {
            Some(index) => {
                entries[index].ensure_editable()?;
                entries[index] = entry;
            }
            None => entries.push(entry),
        }
        Ok(())
    }

    /// Returns every paycheck recorded for a run, in recording order.
    pub fn paychecks_for_run(&self, run_id: Uuid) -> Vec<Paycheck> {
        read(&self.paychecks)
            .iter()
            .filter(|(id, _)| *id == run_id)
            .map(|(_, paycheck)| paycheck.clone())
            .collect()
    }
}

impl TimeEntrySource for InMemoryStore {
    fn entries_for(&self, employee_id: &str, period: &PayPeriod) -> EngineResult<Vec<TimeEntry>> {
        Ok(read(&self.time_entries)
            .iter()
            .filter(|e| e.employee_id == employee_id && period.contains_date(e.work_date))
            .cloned()
            .collect())
    }
}

impl PayConfigurationSource for InMemoryStore {
    fn pay_configuration(&self, employee_id: &str) -> EngineResult<Option<PayConfiguration>> {
        Ok(read(&self.configurations).get(employee_id).cloned())
    }
}

impl PaycheckSink for InMemoryStore {
    fn record(&self, run_id: Uuid, paycheck: &Paycheck) -> EngineResult<()> {
        write(&self.paychecks).push((run_id, paycheck.clone()));
        Ok(())
    }
}

impl TimeEntryLock for InMemoryStore {
    fn lock_entries(&self, period: &PayPeriod) -> EngineResult<usize> {
        let mut locked = 0;
        for entry in write(&self.time_entries).iter_mut() {
            if period.contains_date(entry.work_date) && !entry.locked {
                entry.locked = true;
                locked += 1;
            }
        }
        Ok(locked)
    }
}

// A panic while holding one of these locks cannot leave the maps half-updated,
// so a poisoned lock is still safe to use.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
