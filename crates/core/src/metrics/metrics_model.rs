//! Output models of the metrics engine.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::DateRange;

/// Individual item in the assets or liabilities breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownItem {
    /// Category key (e.g., "checking", "investments", "liability")
    pub category: String,
    /// Display name
    pub name: String,
    /// Value (positive magnitude)
    pub value: Decimal,
    /// Set for individual items (liabilities are listed per account)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

/// Balance-sheet view of a set of accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetPosition {
    pub total_assets: Decimal,
    /// Positive magnitude of everything owed on credit accounts
    pub total_liabilities: Decimal,
    /// Net worth = total_assets - total_liabilities
    pub net_worth: Decimal,
    pub asset_breakdown: Vec<BreakdownItem>,
    pub liability_breakdown: Vec<BreakdownItem>,
}

/// An account whose balance has not been synchronized recently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaleAccountInfo {
    pub account_id: String,
    pub name: String,
    pub last_synced_at: Option<NaiveDateTime>,
    /// Days since the last sync, `None` if the account never synced
    pub days_stale: Option<i64>,
}

/// Income and spending for one pay period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodBudget {
    pub period: DateRange,
    pub period_income: Decimal,
    pub period_spend: Decimal,
    /// Negative when the period is overspent
    pub remaining: Decimal,
    pub utilization_pct: Decimal,
    pub is_overspent: bool,
}

/// Projected payoff of a debt under a fixed monthly payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoffProjection {
    pub months_to_payoff: u32,
    pub total_interest: Decimal,
    pub payoff_date: NaiveDate,
}

/// Projection of a single debt record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtProjection {
    pub debt_id: String,
    pub name: String,
    pub balance: Decimal,
    pub percent_paid: Decimal,
    pub projection: PayoffProjection,
}

/// Pace of a savings goal relative to its target date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalPacing {
    pub remaining: Decimal,
    pub months_needed: u32,
    /// Flat 30-day months until the target date; zero or negative once passed
    pub months_available: i64,
    pub on_track: bool,
    /// Advisory contribution that would hit the target date exactly
    pub required_monthly_contribution: Decimal,
    pub progress_pct: Decimal,
    pub is_completed: bool,
}

/// Derived state of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillStatus {
    Paid,
    Pending,
    Overdue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillClassification {
    pub status: BillStatus,
    /// Negative when the due date has passed
    pub days_until_due: i64,
}

/// Spending total for one transaction category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

/// Income and expense totals over a set of transactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSummary {
    pub total_income: Decimal,
    /// Positive magnitude of all expenses
    pub total_expenses: Decimal,
    pub net_cash_flow: Decimal,
    /// Share of income kept, `None` without income
    pub savings_rate_pct: Option<Decimal>,
    /// Sorted by amount, largest first
    pub expenses_by_category: Vec<CategoryTotal>,
    pub transaction_count: usize,
    /// Transfers are counted but excluded from every total
    pub transfer_count: usize,
}
