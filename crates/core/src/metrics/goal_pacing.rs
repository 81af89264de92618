//! Savings goal pacing.
//!
//! Time to the target date is measured in flat 30-day months rounded up
//! (see [`flat_months_ceil`]), not in calendar months.

use chrono::NaiveDate;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::metrics_model::GoalPacing;
use crate::calendar::{days_until, flat_months_ceil};
use crate::errors::MetricsError;
use crate::goals::SavingsGoal;
use crate::utils::decimal_utils::{clamp_percent, percent_of, round_currency, round_percent};

/// Computes whether a goal's configured contribution reaches the target in
/// time, and the contribution that would.
///
/// A remaining balance with no contribution fails with `Unreachable`; the
/// error still carries the advisory required contribution.
pub fn compute_pacing(
    target: Decimal,
    current: Decimal,
    target_date: NaiveDate,
    monthly_contribution: Decimal,
    as_of: NaiveDate,
) -> Result<GoalPacing, MetricsError> {
    if target <= Decimal::ZERO {
        return Err(MetricsError::invalid_input(format!(
            "goal target must be positive, got {}",
            target
        )));
    }
    if current < Decimal::ZERO {
        return Err(MetricsError::invalid_input(format!(
            "saved amount cannot be negative, got {}",
            current
        )));
    }
    if monthly_contribution < Decimal::ZERO {
        return Err(MetricsError::invalid_input(format!(
            "monthly contribution cannot be negative, got {}",
            monthly_contribution
        )));
    }

    let remaining = (target - current).max(Decimal::ZERO);
    let months_available = flat_months_ceil(days_until(as_of, target_date));
    let required_monthly_contribution =
        round_currency(remaining / Decimal::from(months_available.max(1)));
    // The target is positive, so the ratio can only fail by overflowing upward.
    let progress_pct = round_percent(clamp_percent(
        percent_of(current, target).unwrap_or(Decimal::ONE_HUNDRED),
    ));

    let months_needed = if remaining.is_zero() {
        0
    } else if monthly_contribution.is_zero() {
        return Err(MetricsError::Unreachable {
            remaining,
            required_monthly_contribution,
        });
    } else {
        let months = remaining
            .checked_div(monthly_contribution)
            .map(|months| months.ceil())
            .ok_or_else(|| {
                MetricsError::invalid_input("months to target is outside the projection horizon")
            })?;
        months.to_u32().ok_or_else(|| {
            MetricsError::invalid_input(format!(
                "{} months is outside the projection horizon",
                months
            ))
        })?
    };

    Ok(GoalPacing {
        remaining,
        months_needed,
        months_available,
        on_track: i64::from(months_needed) <= months_available || remaining.is_zero(),
        required_monthly_contribution,
        progress_pct,
        is_completed: remaining.is_zero(),
    })
}

/// Paces a stored goal as of `as_of`.
pub fn pace_goal(goal: &SavingsGoal, as_of: NaiveDate) -> Result<GoalPacing, MetricsError> {
    compute_pacing(
        goal.target_amount,
        goal.current_amount,
        goal.target_date,
        goal.monthly_contribution,
        as_of,
    )
}
