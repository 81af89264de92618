//! Pay-period budgeting.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::metrics_model::PeriodBudget;
use crate::calendar::{DateRange, Frequency};
use crate::errors::MetricsError;
use crate::utils::decimal_utils::{percent_of, round_currency, round_percent};

const MONTHS_PER_YEAR: u32 = 12;

/// Income attributed to one pay period: `monthly_income * periods_per_year / 12`.
///
/// The result is exact; `None` when it does not fit in a `Decimal`.
pub fn period_income(monthly_income: Decimal, frequency: Frequency) -> Option<Decimal> {
    monthly_income
        .checked_mul(Decimal::from(frequency.periods_per_year()))?
        .checked_div(Decimal::from(MONTHS_PER_YEAR))
}

/// Computes what is left of a pay period's income after `period_spend`.
///
/// `remaining` goes negative on overspend; that is reported through
/// `is_overspent`, not as an error. A non-positive `monthly_income` leaves
/// nothing to measure utilization against and fails with `DivisionByZero`.
pub fn compute_period_budget(
    monthly_income: Decimal,
    frequency: Frequency,
    period_spend: Decimal,
    period: DateRange,
) -> Result<PeriodBudget, MetricsError> {
    if monthly_income <= Decimal::ZERO {
        return Err(MetricsError::DivisionByZero(format!(
            "monthly income must be positive, got {}",
            monthly_income
        )));
    }
    if period_spend < Decimal::ZERO {
        return Err(MetricsError::invalid_input(format!(
            "period spend cannot be negative, got {}",
            period_spend
        )));
    }

    let income = period_income(monthly_income, frequency).ok_or_else(|| {
        MetricsError::invalid_input(format!(
            "{} income of {} is outside the supported range",
            frequency.label(),
            monthly_income
        ))
    })?;
    let utilization = percent_of(period_spend, income).ok_or_else(|| {
        MetricsError::DivisionByZero(format!(
            "{} income of {} cannot measure a spend of {}",
            frequency.label(),
            monthly_income,
            period_spend
        ))
    })?;
    let remaining = income - period_spend;

    Ok(PeriodBudget {
        period,
        period_income: round_currency(income),
        period_spend,
        remaining: round_currency(remaining),
        utilization_pct: round_percent(utilization),
        is_overspent: remaining < Decimal::ZERO,
    })
}

/// Days left in `period` as of `as_of`, never negative.
pub fn days_left_in_period(period: &DateRange, as_of: NaiveDate) -> i64 {
    period.days_remaining(as_of)
}
