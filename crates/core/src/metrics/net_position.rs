//! Net position (assets, liabilities, net worth) over account balances.

use chrono::NaiveDateTime;
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::metrics_model::{BreakdownItem, NetPosition, StaleAccountInfo};
use crate::accounts::{category_display_name, category_key, Account, AccountCategory};
use crate::calendar::ceil_days_between;

/// Computes total assets, total liabilities and net worth.
///
/// Every positive balance is an asset, including a credit float. A negative
/// credit balance is a liability. A negative balance on any other account
/// contributes to neither side. Empty input yields an all-zero position.
pub fn compute_net_position(accounts: &[Account]) -> NetPosition {
    let mut category_totals: HashMap<AccountCategory, Decimal> = HashMap::new();
    let mut liability_breakdown: Vec<BreakdownItem> = Vec::new();

    for account in accounts {
        if account.balance > Decimal::ZERO {
            *category_totals
                .entry(account.category)
                .or_insert(Decimal::ZERO) += account.balance;
        } else if account.category == AccountCategory::Credit && account.balance < Decimal::ZERO {
            liability_breakdown.push(BreakdownItem {
                category: "liability".to_string(),
                name: account.name.clone(),
                value: account.balance.abs(),
                account_id: Some(account.id.clone()),
            });
        } else if account.balance < Decimal::ZERO {
            debug!(
                "Ignoring negative balance {} on non-credit account {}",
                account.balance, account.id
            );
        }
    }

    let mut asset_breakdown: Vec<BreakdownItem> = category_totals
        .into_iter()
        .map(|(category, value)| BreakdownItem {
            category: category_key(category).to_string(),
            name: category_display_name(category).to_string(),
            value,
            account_id: None,
        })
        .collect();

    // Largest first, ties by key so the order is stable
    asset_breakdown.sort_by(|a, b| b.value.cmp(&a.value).then(a.category.cmp(&b.category)));
    liability_breakdown.sort_by(|a, b| b.value.cmp(&a.value).then(a.name.cmp(&b.name)));

    let total_assets: Decimal = asset_breakdown.iter().map(|item| item.value).sum();
    let total_liabilities: Decimal = liability_breakdown.iter().map(|item| item.value).sum();

    NetPosition {
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
        asset_breakdown,
        liability_breakdown,
    }
}

/// Lists accounts not synchronized within `threshold_days` of `as_of`.
///
/// Elapsed time is rounded up to whole days. Accounts that never synced are
/// always stale.
pub fn find_stale_accounts(
    accounts: &[Account],
    as_of: NaiveDateTime,
    threshold_days: i64,
) -> Vec<StaleAccountInfo> {
    accounts
        .iter()
        .filter_map(|account| {
            let days_stale = account
                .last_synced_at
                .map(|synced| ceil_days_between(synced, as_of));
            match days_stale {
                Some(days) if days <= threshold_days => None,
                _ => Some(StaleAccountInfo {
                    account_id: account.id.clone(),
                    name: account.name.clone(),
                    last_synced_at: account.last_synced_at,
                    days_stale,
                }),
            }
        })
        .collect()
}
