//! End-to-end tests: JSON data file -> repositories -> dashboard service.

use std::io::Write;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use finboard_core::calendar::DateRange;
use finboard_core::metrics::BillStatus;
use finboard_core::{DashboardService, DashboardServiceTrait};
use finboard_storage_memory::accounts::AccountRepository;
use finboard_storage_memory::bills::BillRepository;
use finboard_storage_memory::budget::BudgetRepository;
use finboard_storage_memory::debts::DebtRepository;
use finboard_storage_memory::goals::GoalRepository;
use finboard_storage_memory::transactions::TransactionRepository;
use finboard_storage_memory::MemoryDb;
use rust_decimal_macros::dec;

const DATA: &str = r#"{
    "accounts": [
        { "id": "chk", "userId": "alex", "name": "Checking", "category": "CHECKING", "balance": 2500.5, "isActive": true, "lastSyncedAt": "2024-03-09T12:00:00" },
        { "id": "visa", "userId": "alex", "name": "Visa", "category": "CREDIT", "balance": -1200.25, "isActive": true, "lastSyncedAt": "2024-03-08T09:30:00" }
    ],
    "budgets": [
        { "id": "budget-1", "userId": "alex", "monthlyIncome": 4000, "payFrequency": "BI_WEEKLY", "firstPayDate": "2024-01-05" }
    ],
    "transactions": [
        { "id": "t1", "userId": "alex", "description": "Payroll", "amount": 4300, "category": "salary", "transactionType": "INCOME", "date": "2024-03-01" },
        { "id": "t2", "userId": "alex", "description": "Rent", "amount": -1500, "category": "rent", "transactionType": "EXPENSE", "date": "2024-03-02" },
        { "id": "t3", "userId": "alex", "description": "Old", "amount": -75, "category": "misc", "transactionType": "EXPENSE", "date": "2024-02-29" }
    ],
    "debts": [
        { "id": "card", "userId": "alex", "name": "Credit Card", "principal": 5000, "balance": 3200, "annualRatePct": 18.5, "minimumPayment": 150 }
    ],
    "goals": [
        { "id": "emergency", "userId": "alex", "name": "Emergency Fund", "targetAmount": 10000, "currentAmount": 6500, "targetDate": "2025-03-10", "monthlyContribution": 500, "isActive": true }
    ],
    "bills": [
        { "id": "power", "userId": "alex", "name": "Electricity", "amount": 84.5, "dueDate": "2024-03-01", "isPaid": false, "frequency": "MONTHLY" },
        { "id": "insurance", "userId": "alex", "name": "Insurance", "amount": 120, "dueDate": "2024-03-15", "isPaid": false, "frequency": "YEARLY" }
    ]
}"#;

fn build_service(db: Arc<MemoryDb>) -> DashboardService {
    DashboardService::new(
        Arc::new(RwLock::new("EUR".to_string())),
        Arc::new(AccountRepository::new(db.clone())),
        Arc::new(BudgetRepository::new(db.clone())),
        Arc::new(TransactionRepository::new(db.clone())),
        Arc::new(DebtRepository::new(db.clone())),
        Arc::new(GoalRepository::new(db.clone())),
        Arc::new(BillRepository::new(db)),
    )
}

#[test]
fn test_dashboard_from_data_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DATA.as_bytes()).unwrap();

    let db = Arc::new(MemoryDb::open(file.path()).unwrap());
    let service = build_service(db);
    let as_of = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

    let summary = service.get_dashboard("alex", as_of).unwrap();

    assert_eq!(summary.base_currency, "EUR");
    assert_eq!(summary.net_position.net_worth, dec!(1300.25));
    assert!(summary.stale_accounts.is_empty());

    assert_eq!(
        summary.period,
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        )
    );
    let period_budget = summary.period_budget.as_ref().unwrap();
    assert_eq!(period_budget.period_spend, dec!(1500));
    assert_eq!(period_budget.remaining, dec!(7166.67));

    assert_eq!(summary.debts.items[0].projection.months_to_payoff, 27);
    assert!(summary.goals.items[0].pacing.on_track);

    assert_eq!(summary.bills.items[0].classification.status, BillStatus::Overdue);
    assert_eq!(summary.bills.total_overdue, dec!(84.5));
    assert_eq!(summary.bills.next_due.as_ref().unwrap().bill_id, "insurance");

    assert!(summary.issues.is_empty());
}

#[test]
fn test_dashboard_serializes_to_camel_case_json() {
    let db = Arc::new(MemoryDb::from_json_str(DATA).unwrap());
    let service = build_service(db);
    let as_of = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

    let summary = service.get_dashboard("alex", as_of).unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert!(json.get("netPosition").is_some());
    assert!(json.get("daysLeftInPeriod").is_some());
    assert_eq!(json["bills"]["items"][0]["classification"]["status"], "OVERDUE");
}
