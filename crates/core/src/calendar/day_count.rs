//! Day and month counting rules.
//!
//! Every date difference the engine reports goes through one of these
//! functions so the rounding rule is stated once:
//! - calendar dates differ by an exact number of days;
//! - timestamps are rounded **up** to whole days;
//! - goal pacing uses a flat 30-day month, rounded **up**.

use chrono::{Months, NaiveDate, NaiveDateTime};

use crate::constants::DAYS_PER_PACING_MONTH;

const SECONDS_PER_DAY: i64 = 86_400;

/// Ceiling division that is correct for negative numerators.
fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) > 0 {
        quotient + 1
    } else {
        quotient
    }
}

/// Whole days from `from` to `to`. Negative when `to` precedes `from`.
pub fn days_until(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Elapsed time between two timestamps, rounded up to whole days.
///
/// Sub-second remainders are ignored.
pub fn ceil_days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    ceil_div((to - from).num_seconds(), SECONDS_PER_DAY)
}

/// Converts a day count into flat 30-day months, rounded up.
///
/// This is an intentional approximation used by savings goal pacing; it is
/// not calendar month arithmetic.
pub fn flat_months_ceil(days: i64) -> i64 {
    ceil_div(days, DAYS_PER_PACING_MONTH)
}

/// Adds calendar months, clamping the day to the end of the target month.
///
/// Saturates at the maximum representable date.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Shifts a date by a signed number of calendar months.
pub fn shift_months(date: NaiveDate, months: i64) -> NaiveDate {
    let magnitude = u32::try_from(months.unsigned_abs()).unwrap_or(u32::MAX);
    if months >= 0 {
        add_months(date, magnitude)
    } else {
        date.checked_sub_months(Months::new(magnitude))
            .unwrap_or(NaiveDate::MIN)
    }
}

/// Shifts a date by a signed number of days, saturating at the date range.
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    match chrono::Duration::try_days(days).and_then(|delta| date.checked_add_signed(delta)) {
        Some(shifted) => shifted,
        None if days < 0 => NaiveDate::MIN,
        None => NaiveDate::MAX,
    }
}
