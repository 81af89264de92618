//! Metrics engine: pure computations over domain records.
//!
//! Nothing in this module touches storage. Callers load records through the
//! repository traits and pass them in, together with the reference date.

mod bill_status;
mod cash_flow;
mod debt_payoff;
mod goal_pacing;
mod metrics_model;
mod net_position;
mod pay_period;

#[cfg(test)]
mod goal_pacing_tests;

pub use bill_status::{classify, classify_bill};
pub use cash_flow::summarize_cash_flow;
pub use debt_payoff::{compute_payoff, monthly_interest, percent_paid, project_debt};
pub use goal_pacing::{compute_pacing, pace_goal};
pub use metrics_model::{
    BillClassification, BillStatus, BreakdownItem, CashFlowSummary, CategoryTotal,
    DebtProjection, GoalPacing, NetPosition, PayoffProjection, PeriodBudget, StaleAccountInfo,
};
pub use net_position::{compute_net_position, find_stale_accounts};
pub use pay_period::{compute_period_budget, days_left_in_period, period_income};
