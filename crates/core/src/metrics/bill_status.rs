//! Bill status classification.

use chrono::NaiveDate;

use super::metrics_model::{BillClassification, BillStatus};
use crate::bills::Bill;
use crate::calendar::days_until;

/// Derives a bill's status as of `as_of`.
///
/// A paid bill is `Paid` whatever its due date. An unpaid bill is `Overdue`
/// strictly after its due date and `Pending` on or before it.
pub fn classify_bill(due_date: NaiveDate, is_paid: bool, as_of: NaiveDate) -> BillClassification {
    let status = if is_paid {
        BillStatus::Paid
    } else if due_date < as_of {
        BillStatus::Overdue
    } else {
        BillStatus::Pending
    };

    BillClassification {
        status,
        days_until_due: days_until(as_of, due_date),
    }
}

pub fn classify(bill: &Bill, as_of: NaiveDate) -> BillClassification {
    classify_bill(bill.due_date, bill.is_paid, as_of)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::BillFrequency;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unpaid_bill_due_yesterday_is_overdue() {
        let result = classify_bill(date(2024, 3, 9), false, date(2024, 3, 10));
        assert_eq!(result.status, BillStatus::Overdue);
        assert_eq!(result.days_until_due, -1);
    }

    #[test]
    fn test_bill_due_today_is_pending() {
        let result = classify_bill(date(2024, 3, 10), false, date(2024, 3, 10));
        assert_eq!(result.status, BillStatus::Pending);
        assert_eq!(result.days_until_due, 0);
    }

    #[test]
    fn test_future_bill_is_pending() {
        let result = classify_bill(date(2024, 4, 1), false, date(2024, 3, 10));
        assert_eq!(result.status, BillStatus::Pending);
        assert_eq!(result.days_until_due, 22);
    }

    #[test]
    fn test_paid_always_wins() {
        for due in [date(2024, 1, 1), date(2024, 3, 10), date(2024, 12, 31)] {
            let result = classify_bill(due, true, date(2024, 3, 10));
            assert_eq!(result.status, BillStatus::Paid);
        }
    }

    #[test]
    fn test_classify_reads_the_record() {
        let bill = Bill {
            id: "bill-1".to_string(),
            user_id: "user-1".to_string(),
            name: "Electricity".to_string(),
            amount: dec!(84.50),
            due_date: date(2024, 3, 1),
            is_paid: false,
            frequency: BillFrequency::Monthly,
            last_paid_date: Some(date(2024, 2, 1)),
        };

        let result = classify(&bill, date(2024, 3, 10));
        assert_eq!(result.status, BillStatus::Overdue);
        assert_eq!(result.days_until_due, -9);
    }
}
