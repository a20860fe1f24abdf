//! Payroll run orchestration.
//!
//! A [`PayrollRunner`] drives the [`PayrollCalculator`] over a roster of
//! employees for one pay period, pulling inputs from and pushing paychecks to
//! the collaborators in [`crate::store`].

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::PayrollCalculator;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Employee, PayPeriod, Paycheck, PayrollRun, SkippedEmployee, index_entries_by_date,
};
use crate::store::{PayConfigurationSource, PaycheckSink, TimeEntryLock, TimeEntrySource};

/// Runs payroll for a roster of employees.
#[derive(Debug, Clone, Default)]
pub struct PayrollRunner {
    calculator: PayrollCalculator,
}

impl PayrollRunner {
    /// Creates a runner around a calculator.
    pub fn new(calculator: PayrollCalculator) -> Self {
        Self { calculator }
    }

    /// Returns the calculator used for each employee.
    pub fn calculator(&self) -> &PayrollCalculator {
        &self.calculator
    }

    /// Runs payroll for `employees` over `period`.
    ///
    /// The period's time entries are locked before any paycheck is computed.
    /// Terminated employees are ignored. An employee whose configuration or
    /// entries cannot be used is recorded in [`PayrollRun::skipped`] and the
    /// run carries on with the next employee.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidRange`] if the period starts after it ends;
    ///   nothing is locked or recorded in that case.
    /// - Any error from locking entries, returned as is.
    /// - [`EngineError::RunAborted`] if recording a paycheck fails. It carries
    ///   the run id so paychecks already recorded under it can be found.
    pub fn run<S>(
        &self,
        store: &S,
        employees: &[Employee],
        period: PayPeriod,
        calculated_by: Option<String>,
    ) -> EngineResult<PayrollRun>
    where
        S: TimeEntrySource + PayConfigurationSource + PaycheckSink + TimeEntryLock,
    {
        period.validate()?;

        let mut run = PayrollRun {
            id: Uuid::new_v4(),
            pay_period: period,
            calculated_at: Utc::now(),
            calculated_by,
            locked: true,
            paychecks: Vec::new(),
            skipped: Vec::new(),
        };

        info!(
            run_id = %run.id,
            period_start = %period.start_date,
            period_end = %period.end_date,
            employees = employees.len(),
            "Starting payroll run"
        );

        let locked = store.lock_entries(&period)?;
        debug!(run_id = %run.id, locked_entries = locked, "Locked time entries");

        for employee in employees {
            if !employee.is_active() {
                debug!(run_id = %run.id, employee_id = %employee.id, "Ignoring inactive employee");
                continue;
            }

            match self.paycheck_for(store, employee, &period) {
                Ok(paycheck) => {
                    if let Err(err) = store.record(run.id, &paycheck) {
                        warn!(
                            run_id = %run.id,
                            employee_id = %employee.id,
                            recorded = run.paychecks.len(),
                            error = %err,
                            "Recording paycheck failed, aborting run"
                        );
                        return Err(EngineError::RunAborted {
                            run_id: run.id,
                            recorded: run.paychecks.len(),
                            source: Box::new(err),
                        });
                    }
                    run.paychecks.push(paycheck);
                }
                Err(err) => {
                    warn!(
                        run_id = %run.id,
                        employee_id = %employee.id,
                        error = %err,
                        "Skipping employee"
                    );
                    run.skipped.push(SkippedEmployee {
                        employee_id: employee.id.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        info!(
            run_id = %run.id,
            paychecks = run.paychecks.len(),
            skipped = run.skipped.len(),
            total_gross = %run.total_gross(),
            total_net = %run.total_net(),
            "Payroll run completed"
        );

        Ok(run)
    }

    fn paycheck_for<S>(
        &self,
        store: &S,
        employee: &Employee,
        period: &PayPeriod,
    ) -> EngineResult<Paycheck>
    where
        S: TimeEntrySource + PayConfigurationSource,
    {
        let configuration = store.pay_configuration(&employee.id)?;
        let entries = index_entries_by_date(store.entries_for(&employee.id, period)?)?;

        let calculation =
            self.calculator
                .compute_detailed(employee, configuration.as_ref(), period, &entries)?;

        Ok(Paycheck {
            employee_id: employee.id.clone(),
            employee_name: employee.display_name(),
            hours: calculation.hours,
            breakdown: calculation.breakdown,
        })
    }
}
