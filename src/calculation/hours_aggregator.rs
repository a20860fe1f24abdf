//! Hours aggregation over a pay period.
//!
//! Walks a pay period day by day and turns the employee's sparse time entries
//! into regular, overtime and PTO totals under the pay-type rules.

use rust_decimal::Decimal;

use crate::config::HoursRules;
use crate::models::{EntriesByDate, HoursSummary, PayPeriod, PayType};

use super::{get_day_type, is_business_day, split_daily_hours};

/// Hours credited to a salaried employee for each Monday-Friday day.
pub const SALARIED_DAILY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Aggregates hours for one employee over an inclusive pay period.
///
/// Every day in the period is visited exactly once, in ascending order.
///
/// - **Salary**: each Monday-Friday day adds `salaried_daily_hours` to regular
///   hours whether or not an entry exists. An entry's PTO is added; its worked
///   hours are ignored.
/// - **Hourly**: days without an entry contribute nothing. An entry's PTO is
///   always added. Saturday hours are all overtime; on any other day hours
///   above the daily threshold are overtime.
///
/// An inverted period yields all-zero totals. The function is pure.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::aggregate_hours;
/// use payroll_engine::config::HoursRules;
/// use payroll_engine::models::{EntriesByDate, PayPeriod, PayType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// )
/// .unwrap();
///
/// let hours = aggregate_hours(PayType::Salary, &EntriesByDate::new(), &period, &HoursRules::default());
/// assert_eq!(hours.regular_hours, Decimal::new(40, 0));
/// assert_eq!(hours.overtime_hours, Decimal::ZERO);
/// ```
pub fn aggregate_hours(
    pay_type: PayType,
    entries: &EntriesByDate,
    period: &PayPeriod,
    rules: &HoursRules,
) -> HoursSummary {
    let mut summary = HoursSummary::default();

    for date in period.days() {
        let entry = entries.get(&date);

        match pay_type {
            PayType::Salary => {
                if is_business_day(date) {
                    summary.regular_hours += rules.salaried_daily_hours;
                }
                if let Some(entry) = entry {
                    summary.pto_hours += entry.pto_hours;
                }
            }
            PayType::Hourly => {
                let Some(entry) = entry else {
                    continue;
                };

                summary.pto_hours += entry.pto_hours;

                let split = split_daily_hours(
                    entry.hours_worked,
                    get_day_type(date),
                    rules.daily_overtime_threshold,
                );
                summary.regular_hours += split.regular_hours;
                summary.overtime_hours += split.overtime_hours;
            }
        }
    }

    summary
}
