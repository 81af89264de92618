//! Cash flow aggregation over transactions.

use rust_decimal::Decimal;
use std::collections::HashMap;

use super::metrics_model::{CashFlowSummary, CategoryTotal};
use crate::calendar::DateRange;
use crate::transactions::{Transaction, TransactionType};
use crate::utils::decimal_utils::{percent_of, round_percent};

/// Totals income and expenses, optionally restricted to `window`.
///
/// Amount signs are not trusted: the transaction type decides the side and
/// the magnitude is used. Transfers move money between the user's own
/// accounts and only show up in `transfer_count`.
pub fn summarize_cash_flow(
    transactions: &[Transaction],
    window: Option<&DateRange>,
) -> CashFlowSummary {
    let mut summary = CashFlowSummary::default();
    let mut by_category: HashMap<&str, Decimal> = HashMap::new();

    for transaction in transactions {
        if let Some(range) = window {
            if !range.contains(transaction.date) {
                continue;
            }
        }
        summary.transaction_count += 1;

        match transaction.transaction_type {
            TransactionType::Income => summary.total_income += transaction.amount.abs(),
            TransactionType::Expense => {
                let amount = transaction.amount.abs();
                summary.total_expenses += amount;
                *by_category
                    .entry(transaction.category.as_str())
                    .or_insert(Decimal::ZERO) += amount;
            }
            TransactionType::Transfer => summary.transfer_count += 1,
        }
    }

    summary.net_cash_flow = summary.total_income - summary.total_expenses;
    summary.savings_rate_pct =
        percent_of(summary.net_cash_flow, summary.total_income).map(round_percent);

    let mut expenses_by_category: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: category.to_string(),
            amount,
        })
        .collect();
    expenses_by_category.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.category.cmp(&b.category)));
    summary.expenses_by_category = expenses_by_category;

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn txn(
        id: &str,
        transaction_type: TransactionType,
        amount: Decimal,
        category: &str,
        day: u32,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            description: format!("Transaction {}", id),
            amount,
            category: category.to_string(),
            transaction_type,
            date: date(day),
            is_recurring: false,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn("t1", TransactionType::Income, dec!(3000), "salary", 1),
            txn("t2", TransactionType::Expense, dec!(-1200), "rent", 2),
            txn("t3", TransactionType::Expense, dec!(-85.25), "groceries", 5),
            txn("t4", TransactionType::Expense, dec!(64.75), "groceries", 12),
            txn("t5", TransactionType::Transfer, dec!(-500), "transfer", 15),
            txn("t6", TransactionType::Expense, dec!(-40), "dining", 20),
        ]
    }

    #[test]
    fn test_empty_transactions() {
        let summary = summarize_cash_flow(&[], None);
        assert_eq!(summary, CashFlowSummary::default());
        assert_eq!(summary.savings_rate_pct, None);
    }

    #[test]
    fn test_summarize_excludes_transfers() {
        let summary = summarize_cash_flow(&sample(), None);

        assert_eq!(summary.total_income, dec!(3000));
        assert_eq!(summary.total_expenses, dec!(1390));
        assert_eq!(summary.net_cash_flow, dec!(1610));
        assert_eq!(summary.savings_rate_pct, Some(dec!(53.67)));
        assert_eq!(summary.transaction_count, 6);
        assert_eq!(summary.transfer_count, 1);

        let categories: Vec<&str> = summary
            .expenses_by_category
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(categories, vec!["rent", "groceries", "dining"]);
        assert_eq!(summary.expenses_by_category[1].amount, dec!(150));
    }

    #[test]
    fn test_window_limits_transactions() {
        let window = DateRange::new(date(1), date(12));
        let summary = summarize_cash_flow(&sample(), Some(&window));

        // Day 12 is the exclusive end
        assert_eq!(summary.transaction_count, 3);
        assert_eq!(summary.total_expenses, dec!(1285.25));
        assert_eq!(summary.expenses_by_category.len(), 2);
    }

    #[test]
    fn test_expenses_without_income() {
        let transactions = vec![txn("t1", TransactionType::Expense, dec!(-20), "fees", 3)];
        let summary = summarize_cash_flow(&transactions, None);

        assert_eq!(summary.net_cash_flow, dec!(-20));
        assert_eq!(summary.savings_rate_pct, None);
    }
}
