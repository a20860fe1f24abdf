//! Collaborator interfaces for payroll runs.
//!
//! The calculation core never reaches for storage itself. A payroll run pulls
//! time entries and pay configurations through these traits, records each
//! finished paycheck into a sink, and locks the period's entries once the run
//! has started. Any backend (a database, a remote service, the bundled
//! [`InMemoryStore`]) can sit behind them.

mod memory;

pub use memory::InMemoryStore;

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{PayConfiguration, PayPeriod, Paycheck, TimeEntry};

/// Provides time entries for an employee.
pub trait TimeEntrySource {
    /// Returns the employee's entries dated within `period`, in any order.
    fn entries_for(&self, employee_id: &str, period: &PayPeriod) -> EngineResult<Vec<TimeEntry>>;
}

/// Provides pay configurations.
pub trait PayConfigurationSource {
    /// Returns the employee's pay configuration, or `None` if none is on file.
    fn pay_configuration(&self, employee_id: &str) -> EngineResult<Option<PayConfiguration>>;
}

/// Receives paychecks produced by a payroll run.
pub trait PaycheckSink {
    /// Records one paycheck for the run identified by `run_id`.
    fn record(&self, run_id: Uuid, paycheck: &Paycheck) -> EngineResult<()>;
}

/// Locks time entries against further edits.
pub trait TimeEntryLock {
    /// Locks every entry dated within `period` and returns how many entries
    /// were newly locked.
    fn lock_entries(&self, period: &PayPeriod) -> EngineResult<usize>;
}
