use std::sync::Arc;

use finboard_core::calendar::DateRange;
use finboard_core::transactions::{Transaction, TransactionRepositoryTrait};
use finboard_core::Result;

use crate::db::MemoryDb;

/// Repository for reading ledger transactions from the dataset
pub struct TransactionRepository {
    db: Arc<MemoryDb>,
}

impl TransactionRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

impl TransactionRepositoryTrait for TransactionRepository {
    /// Transactions dated in `[range.start, range.end)`, oldest first.
    fn list(&self, user_id: &str, range: &DateRange) -> Result<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = self
            .db
            .dataset()
            .transactions
            .iter()
            .filter(|txn| txn.user_id == user_id && range.contains(txn.date))
            .cloned()
            .collect();
        transactions.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::sample_db;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_list_uses_half_open_range() {
        let repository = TransactionRepository::new(sample_db());
        let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 15));

        let ids: Vec<String> = repository
            .list("user-1", &range)
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();

        // t3 falls on the exclusive end, t4 before the start
        assert_eq!(ids, vec!["t1", "t2"]);
    }

    #[test]
    fn test_list_is_scoped_to_user() {
        let repository = TransactionRepository::new(sample_db());
        let range = DateRange::calendar_month(date(2024, 3, 1));

        let transactions = repository.list("user-2", &range).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id, "t5");
    }
}
