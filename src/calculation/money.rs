//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits carried by every returned monetary amount.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to cents, half-up (ties away from zero).
///
/// The result always carries exactly two fractional digits, so `1000`
/// becomes `1000.00`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("72.675").unwrap()).to_string(), "72.68");
/// assert_eq!(round_money(Decimal::from_str("29.924").unwrap()).to_string(), "29.92");
/// assert_eq!(round_money(Decimal::new(1000, 0)).to_string(), "1000.00");
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}
