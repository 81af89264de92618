//! Dashboard service implementation.

use chrono::{NaiveDate, NaiveTime};
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock};

use super::dashboard_model::{
    BillItem, BillOverview, DashboardSummary, DebtOverview, GoalItem, GoalOverview, IssueEntity,
    ItemIssue,
};
use super::dashboard_traits::DashboardServiceTrait;
use crate::accounts::AccountRepositoryTrait;
use crate::bills::BillRepositoryTrait;
use crate::budget::BudgetRepositoryTrait;
use crate::calendar::DateRange;
use crate::constants::ACCOUNT_STALENESS_THRESHOLD_DAYS;
use crate::debts::DebtRepositoryTrait;
use crate::errors::{Error, MetricsError, Result};
use crate::goals::GoalRepositoryTrait;
use crate::metrics::{
    classify, compute_net_position, compute_period_budget, days_left_in_period,
    find_stale_accounts, pace_goal, percent_paid, project_debt, summarize_cash_flow, BillStatus,
};
use crate::transactions::TransactionRepositoryTrait;

/// Service building dashboard views from the repositories.
pub struct DashboardService {
    base_currency: Arc<RwLock<String>>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    debt_repository: Arc<dyn DebtRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    bill_repository: Arc<dyn BillRepositoryTrait>,
}

impl DashboardService {
    /// Creates a new DashboardService instance.
    pub fn new(
        base_currency: Arc<RwLock<String>>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        debt_repository: Arc<dyn DebtRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        bill_repository: Arc<dyn BillRepositoryTrait>,
    ) -> Self {
        Self {
            base_currency,
            account_repository,
            budget_repository,
            transaction_repository,
            debt_repository,
            goal_repository,
            bill_repository,
        }
    }

    fn base_currency(&self) -> Result<String> {
        self.base_currency
            .read()
            .map(|currency| currency.clone())
            .map_err(|e| Error::Unexpected(format!("Base currency lock poisoned: {}", e)))
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_dashboard(&self, user_id: &str, as_of: NaiveDate) -> Result<DashboardSummary> {
        let base_currency = self.base_currency()?;
        debug!(
            "Building dashboard for user {} as of {} in {}",
            user_id, as_of, base_currency
        );

        let accounts = self.account_repository.list(user_id, Some(true))?;
        let net_position = compute_net_position(&accounts);
        let stale_accounts = find_stale_accounts(
            &accounts,
            as_of.and_time(NaiveTime::default()),
            ACCOUNT_STALENESS_THRESHOLD_DAYS,
        );
        if !stale_accounts.is_empty() {
            debug!("{} stale accounts for user {}", stale_accounts.len(), user_id);
        }

        let mut issues: Vec<ItemIssue> = Vec::new();

        let budget = self.budget_repository.get_budget(user_id)?;
        let period = match &budget {
            Some(budget) => budget.current_period(as_of),
            None => {
                debug!("No budget for user {}, using the calendar month", user_id);
                DateRange::calendar_month(as_of)
            }
        };

        let transactions = self.transaction_repository.list(user_id, &period)?;
        let cash_flow = summarize_cash_flow(&transactions, Some(&period));

        let period_budget = match &budget {
            Some(budget) => match compute_period_budget(
                budget.monthly_income,
                budget.pay_frequency,
                cash_flow.total_expenses,
                period,
            ) {
                Ok(period_budget) => Some(period_budget),
                Err(e) => {
                    warn!("Budget {} cannot be evaluated: {}", budget.id, e);
                    issues.push(ItemIssue::new(
                        IssueEntity::Budget,
                        &budget.id,
                        "Budget",
                        &e,
                    ));
                    None
                }
            },
            None => None,
        };

        let debts = self.get_debt_overview(user_id, as_of)?;
        let goals = self.get_goal_overview(user_id, as_of)?;
        let bills = self.get_bill_overview(user_id, as_of)?;

        issues.extend(debts.issues.iter().cloned());
        issues.extend(goals.issues.iter().cloned());
        issues.extend(bills.issues.iter().cloned());

        Ok(DashboardSummary {
            user_id: user_id.to_string(),
            as_of,
            base_currency,
            net_position,
            stale_accounts,
            period,
            days_left_in_period: days_left_in_period(&period, as_of),
            period_budget,
            cash_flow,
            debts,
            goals,
            bills,
            issues,
        })
    }

    fn get_debt_overview(&self, user_id: &str, as_of: NaiveDate) -> Result<DebtOverview> {
        let debts = self.debt_repository.list(user_id)?;
        let mut overview = DebtOverview::default();

        for debt in &debts {
            if let Err(e) = debt.validate() {
                warn!("Skipping debt {}: {}", debt.id, e);
                overview
                    .issues
                    .push(ItemIssue::new(IssueEntity::Debt, &debt.id, &debt.name, &e));
                continue;
            }

            overview.total_balance += debt.balance;
            overview.total_principal += debt.principal;
            overview.total_minimum_payments += debt.minimum_payment;

            match project_debt(debt, as_of) {
                Ok(projected) => {
                    overview.total_projected_interest += projected.projection.total_interest;
                    let payoff_date = projected.projection.payoff_date;
                    if overview
                        .latest_payoff_date
                        .map_or(true, |latest| payoff_date > latest)
                    {
                        overview.latest_payoff_date = Some(payoff_date);
                    }
                    overview.items.push(projected);
                }
                Err(e) => {
                    debug!("Debt {} has no payoff projection: {}", debt.id, e);
                    overview
                        .issues
                        .push(ItemIssue::new(IssueEntity::Debt, &debt.id, &debt.name, &e));
                }
            }
        }

        if overview.total_principal > Decimal::ZERO {
            overview.overall_percent_paid =
                percent_paid(overview.total_principal, overview.total_balance).ok();
        }

        Ok(overview)
    }

    fn get_goal_overview(&self, user_id: &str, as_of: NaiveDate) -> Result<GoalOverview> {
        let goals = self.goal_repository.load_goals(user_id)?;
        let mut overview = GoalOverview::default();

        for goal in goals.iter().filter(|goal| goal.is_active) {
            match pace_goal(goal, as_of) {
                Ok(pacing) => {
                    overview.total_target += goal.target_amount;
                    overview.total_saved += goal.current_amount;
                    if pacing.on_track {
                        overview.on_track_count += 1;
                    }
                    overview.items.push(GoalItem {
                        goal_id: goal.id.clone(),
                        name: goal.name.clone(),
                        target_amount: goal.target_amount,
                        current_amount: goal.current_amount,
                        target_date: goal.target_date,
                        pacing,
                    });
                }
                Err(e) => {
                    debug!("Goal {} cannot be paced: {}", goal.id, e);
                    overview
                        .issues
                        .push(ItemIssue::new(IssueEntity::Goal, &goal.id, &goal.name, &e));
                }
            }
        }

        Ok(overview)
    }

    fn get_bill_overview(&self, user_id: &str, as_of: NaiveDate) -> Result<BillOverview> {
        let mut bills = self.bill_repository.list(user_id)?;
        bills.sort_by(|a, b| a.due_date.cmp(&b.due_date).then(a.name.cmp(&b.name)));

        let mut overview = BillOverview::default();

        for bill in &bills {
            if bill.amount <= Decimal::ZERO {
                let e = MetricsError::invalid_input(format!(
                    "Bill '{}' must have a positive amount, got {}",
                    bill.name, bill.amount
                ));
                warn!("Skipping bill {}: {}", bill.id, e);
                overview
                    .issues
                    .push(ItemIssue::new(IssueEntity::Bill, &bill.id, &bill.name, &e));
                continue;
            }

            let classification = classify(bill, as_of);
            match classification.status {
                BillStatus::Pending => overview.total_pending += bill.amount,
                BillStatus::Overdue => overview.total_overdue += bill.amount,
                BillStatus::Paid => {}
            }

            let item = BillItem {
                bill_id: bill.id.clone(),
                name: bill.name.clone(),
                amount: bill.amount,
                due_date: bill.due_date,
                frequency: bill.frequency,
                classification,
            };
            if overview.next_due.is_none() && classification.status == BillStatus::Pending {
                overview.next_due = Some(item.clone());
            }
            overview.items.push(item);
        }

        Ok(overview)
    }
}
