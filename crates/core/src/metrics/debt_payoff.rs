//! Debt amortization under a fixed monthly payment.
//!
//! With `r` the monthly rate (`annual_rate_pct / 100 / 12`), `B` the balance
//! and `P` the payment, the number of payments is
//!
//! ```text
//! n = ceil( ln(P / (P - B*r)) / ln(1 + r) )
//! ```
//!
//! and `n = ceil(B / P)` when `r = 0`. When `P <= B*r` the payment never
//! catches up with the interest and the debt is reported as unpayable rather
//! than projected to infinity.

use chrono::NaiveDate;
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

use super::metrics_model::{DebtProjection, PayoffProjection};
use crate::calendar::add_months;
use crate::debts::Debt;
use crate::errors::MetricsError;
use crate::utils::decimal_utils::{clamp_percent, percent_of, round_currency, round_percent};

const MONTHS_PER_YEAR: u32 = 12;

/// Monthly interest rate as a fraction.
fn monthly_rate(annual_rate_pct: Decimal) -> Decimal {
    annual_rate_pct / Decimal::ONE_HUNDRED / Decimal::from(MONTHS_PER_YEAR)
}

/// Interest accruing on `balance` over one month.
pub fn monthly_interest(balance: Decimal, annual_rate_pct: Decimal) -> Decimal {
    round_currency(balance * monthly_rate(annual_rate_pct))
}

fn ln(value: Decimal) -> Result<Decimal, MetricsError> {
    value
        .checked_ln()
        .ok_or_else(|| MetricsError::invalid_input(format!("cannot take the logarithm of {}", value)))
}

fn beyond_horizon(what: &str) -> MetricsError {
    MetricsError::invalid_input(format!("{} is outside the projection horizon", what))
}

fn whole_months(months: Decimal) -> Result<u32, MetricsError> {
    months.ceil().to_u32().ok_or_else(|| {
        MetricsError::invalid_input(format!("{} months is outside the projection horizon", months))
    })
}

/// Projects months to payoff, total interest and payoff date.
pub fn compute_payoff(
    balance: Decimal,
    annual_rate_pct: Decimal,
    monthly_payment: Decimal,
    as_of: NaiveDate,
) -> Result<PayoffProjection, MetricsError> {
    if balance < Decimal::ZERO {
        return Err(MetricsError::invalid_input(format!(
            "balance cannot be negative, got {}",
            balance
        )));
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(MetricsError::invalid_input(format!(
            "interest rate cannot be negative, got {}",
            annual_rate_pct
        )));
    }
    if monthly_payment <= Decimal::ZERO {
        return Err(MetricsError::invalid_input(format!(
            "monthly payment must be positive, got {}",
            monthly_payment
        )));
    }

    if balance.is_zero() {
        return Ok(PayoffProjection {
            months_to_payoff: 0,
            total_interest: Decimal::ZERO,
            payoff_date: as_of,
        });
    }

    let rate = monthly_rate(annual_rate_pct);
    let months = if rate.is_zero() {
        let periods = balance
            .checked_div(monthly_payment)
            .ok_or_else(|| beyond_horizon("months to payoff"))?;
        whole_months(periods)?
    } else {
        let accruing = balance
            .checked_mul(rate)
            .ok_or_else(|| beyond_horizon("monthly interest"))?;
        if monthly_payment <= accruing {
            return Err(MetricsError::UnpayableDebt {
                monthly_payment,
                monthly_interest: round_currency(accruing),
            });
        }
        let ratio = monthly_payment
            .checked_div(monthly_payment - accruing)
            .ok_or_else(|| beyond_horizon("months to payoff"))?;
        let periods = ln(ratio)?
            .checked_div(ln(Decimal::ONE + rate)?)
            .ok_or_else(|| beyond_horizon("months to payoff"))?;
        whole_months(periods)?
    };

    let total_paid = monthly_payment
        .checked_mul(Decimal::from(months))
        .ok_or_else(|| beyond_horizon("total repayment"))?;
    let total_interest = (total_paid - balance).max(Decimal::ZERO);

    Ok(PayoffProjection {
        months_to_payoff: months,
        total_interest: round_currency(total_interest),
        payoff_date: add_months(as_of, months),
    })
}

/// Share of the principal already repaid, clamped to `[0, 100]`.
pub fn percent_paid(principal: Decimal, balance: Decimal) -> Result<Decimal, MetricsError> {
    if principal <= Decimal::ZERO {
        return Err(MetricsError::invalid_input(format!(
            "principal must be positive, got {}",
            principal
        )));
    }
    let paid = percent_of(principal - balance, principal).unwrap_or(Decimal::ZERO);
    Ok(round_percent(clamp_percent(paid)))
}

/// Validates a debt record and projects it at its minimum payment.
pub fn project_debt(debt: &Debt, as_of: NaiveDate) -> Result<DebtProjection, MetricsError> {
    debt.validate()?;
    let projection = compute_payoff(
        debt.balance,
        debt.annual_rate_pct,
        debt.minimum_payment,
        as_of,
    )?;

    Ok(DebtProjection {
        debt_id: debt.id.clone(),
        name: debt.name.clone(),
        balance: debt.balance,
        percent_paid: percent_paid(debt.principal, debt.balance)?,
        projection,
    })
}
