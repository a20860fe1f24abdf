//! Daily overtime split.
//!
//! This module splits the hours an hourly employee worked on one day into
//! regular and overtime portions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DayType;

/// Default daily overtime threshold in hours.
pub const DEFAULT_DAILY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The split of one day's worked hours.
///
/// `regular_hours + overtime_hours` always equals the hours worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHoursSplit {
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime multiplier.
    pub overtime_hours: Decimal,
}

/// Splits one day's worked hours into regular and overtime hours.
///
/// - On a Saturday every hour is overtime, whatever the total.
/// - On any other day, hours up to `threshold` are regular and the excess is
///   overtime.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{split_daily_hours, DayType, DEFAULT_DAILY_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
///
/// let tuesday = split_daily_hours(Decimal::new(10, 0), DayType::Weekday, DEFAULT_DAILY_OVERTIME_THRESHOLD);
/// assert_eq!(tuesday.regular_hours, Decimal::new(8, 0));
/// assert_eq!(tuesday.overtime_hours, Decimal::new(2, 0));
///
/// let saturday = split_daily_hours(Decimal::new(5, 0), DayType::Saturday, DEFAULT_DAILY_OVERTIME_THRESHOLD);
/// assert_eq!(saturday.regular_hours, Decimal::ZERO);
/// assert_eq!(saturday.overtime_hours, Decimal::new(5, 0));
/// ```
pub fn split_daily_hours(
    worked_hours: Decimal,
    day_type: DayType,
    threshold: Decimal,
) -> DailyHoursSplit {
    if day_type == DayType::Saturday {
        return DailyHoursSplit {
            regular_hours: Decimal::ZERO,
            overtime_hours: worked_hours,
        };
    }

    if worked_hours > threshold {
        DailyHoursSplit {
            regular_hours: threshold,
            overtime_hours: worked_hours - threshold,
        }
    } else {
        DailyHoursSplit {
            regular_hours: worked_hours,
            overtime_hours: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn weekday(hours: &str) -> DailyHoursSplit {
        split_daily_hours(dec(hours), DayType::Weekday, DEFAULT_DAILY_OVERTIME_THRESHOLD)
    }

    #[test]
    fn test_exactly_8_hours_no_overtime() {
        let split = weekday("8.0");
        assert_eq!(split.regular_hours, dec("8"));
        assert_eq!(split.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_10_hours_2_hours_overtime() {
        let split = weekday("10");
        assert_eq!(split.regular_hours, dec("8"));
        assert_eq!(split.overtime_hours, dec("2"));
    }

    #[test]
    fn test_8_25_hours_quarter_hour_overtime() {
        let split = weekday("8.25");
        assert_eq!(split.regular_hours, dec("8"));
        assert_eq!(split.overtime_hours, dec("0.25"));
    }

    #[test]
    fn test_short_day_all_regular() {
        let split = weekday("6");
        assert_eq!(split.regular_hours, dec("6"));
        assert_eq!(split.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_zero_hours() {
        let split = weekday("0");
        assert_eq!(split.regular_hours, Decimal::ZERO);
        assert_eq!(split.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_sunday_uses_threshold_like_weekday() {
        let split = split_daily_hours(dec("9"), DayType::Sunday, DEFAULT_DAILY_OVERTIME_THRESHOLD);
        assert_eq!(split.regular_hours, dec("8"));
        assert_eq!(split.overtime_hours, dec("1"));
    }

    #[test]
    fn test_saturday_all_overtime_below_threshold() {
        let split = split_daily_hours(dec("5"), DayType::Saturday, DEFAULT_DAILY_OVERTIME_THRESHOLD);
        assert_eq!(split.regular_hours, Decimal::ZERO);
        assert_eq!(split.overtime_hours, dec("5"));
    }

    #[test]
    fn test_saturday_all_overtime_above_threshold() {
        let split = split_daily_hours(dec("11"), DayType::Saturday, DEFAULT_DAILY_OVERTIME_THRESHOLD);
        assert_eq!(split.regular_hours, Decimal::ZERO);
        assert_eq!(split.overtime_hours, dec("11"));
    }

    #[test]
    fn test_custom_threshold() {
        let split = split_daily_hours(dec("8.5"), DayType::Weekday, dec("7.5"));
        assert_eq!(split.regular_hours, dec("7.5"));
        assert_eq!(split.overtime_hours, dec("1.0"));
    }

    #[test]
    fn test_default_threshold_constant() {
        assert_eq!(DEFAULT_DAILY_OVERTIME_THRESHOLD, dec("8"));
    }
}
