//! Dashboard domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{BillFrequency, DateRange};
use crate::errors::{MetricsError, MetricsErrorKind};
use crate::metrics::{
    BillClassification, CashFlowSummary, DebtProjection, GoalPacing, NetPosition, PeriodBudget,
    StaleAccountInfo,
};

/// Record type an [`ItemIssue`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueEntity {
    Budget,
    Debt,
    Goal,
    Bill,
}

/// A record that could not be evaluated.
///
/// Issues are reported next to the results of the records that could be
/// evaluated; one bad record never hides the others.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemIssue {
    pub entity: IssueEntity,
    pub entity_id: String,
    pub name: String,
    pub kind: MetricsErrorKind,
    pub message: String,
}

impl ItemIssue {
    pub fn new(
        entity: IssueEntity,
        entity_id: impl Into<String>,
        name: impl Into<String>,
        error: &MetricsError,
    ) -> Self {
        Self {
            entity,
            entity_id: entity_id.into(),
            name: name.into(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Debts page: one projection per payable debt plus portfolio totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DebtOverview {
    pub items: Vec<DebtProjection>,
    /// Totals cover every debt with a valid record, payable or not
    pub total_balance: Decimal,
    pub total_principal: Decimal,
    pub total_minimum_payments: Decimal,
    /// `None` when no debt has a valid record
    pub overall_percent_paid: Option<Decimal>,
    /// Sum over the projected items only
    pub total_projected_interest: Decimal,
    pub latest_payoff_date: Option<NaiveDate>,
    pub issues: Vec<ItemIssue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalItem {
    pub goal_id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    pub pacing: GoalPacing,
}

/// Savings goals page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalOverview {
    pub items: Vec<GoalItem>,
    pub total_target: Decimal,
    pub total_saved: Decimal,
    pub on_track_count: usize,
    pub issues: Vec<ItemIssue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    pub bill_id: String,
    pub name: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub frequency: BillFrequency,
    pub classification: BillClassification,
}

/// Bills page, items ordered by due date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BillOverview {
    pub items: Vec<BillItem>,
    pub total_pending: Decimal,
    pub total_overdue: Decimal,
    /// Earliest pending bill
    pub next_due: Option<BillItem>,
    pub issues: Vec<ItemIssue>,
}

/// Everything the home screen shows for one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub user_id: String,
    pub as_of: NaiveDate,
    pub base_currency: String,
    pub net_position: NetPosition,
    pub stale_accounts: Vec<StaleAccountInfo>,
    /// Current pay period, or the calendar month without a budget
    pub period: DateRange,
    pub days_left_in_period: i64,
    pub period_budget: Option<PeriodBudget>,
    pub cash_flow: CashFlowSummary,
    pub debts: DebtOverview,
    pub goals: GoalOverview,
    pub bills: BillOverview,
    /// Every issue raised while building the summary
    pub issues: Vec<ItemIssue>,
}
