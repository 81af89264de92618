//! Dashboard service traits.

use chrono::NaiveDate;

use super::dashboard_model::{BillOverview, DashboardSummary, DebtOverview, GoalOverview};
use crate::errors::Result;

/// Trait defining the contract for dashboard operations.
///
/// Errors returned here come from the repositories. Records that cannot be
/// evaluated are reported as issues inside the result instead.
pub trait DashboardServiceTrait: Send + Sync {
    /// Builds the full dashboard for `user_id` as of `as_of`.
    ///
    /// # Returns
    /// A `DashboardSummary` containing:
    /// - Net position over active accounts, and stale accounts
    /// - The current pay period with its budget and cash flow
    /// - Debt, goal and bill overviews
    /// - Every per-record issue
    fn get_dashboard(&self, user_id: &str, as_of: NaiveDate) -> Result<DashboardSummary>;

    fn get_debt_overview(&self, user_id: &str, as_of: NaiveDate) -> Result<DebtOverview>;

    /// Active goals only.
    fn get_goal_overview(&self, user_id: &str, as_of: NaiveDate) -> Result<GoalOverview>;

    fn get_bill_overview(&self, user_id: &str, as_of: NaiveDate) -> Result<BillOverview>;
}
