//! Unit tests for savings goal pacing.

use super::goal_pacing::*;
use crate::errors::{MetricsError, MetricsErrorKind};
use crate::goals::SavingsGoal;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn create_test_goal(target: Decimal, current: Decimal, contribution: Decimal) -> SavingsGoal {
    SavingsGoal {
        id: "goal-1".to_string(),
        user_id: "user-1".to_string(),
        name: "Emergency Fund".to_string(),
        target_amount: target,
        current_amount: current,
        target_date: date(2025, 1, 15),
        monthly_contribution: contribution,
        is_active: true,
    }
}

#[test]
fn test_goal_on_track() {
    // 366 days to the target date is 13 flat months
    let pacing =
        compute_pacing(dec!(10000), dec!(6500), date(2025, 1, 15), dec!(500), as_of()).unwrap();

    assert_eq!(pacing.remaining, dec!(3500));
    assert_eq!(pacing.months_needed, 7);
    assert_eq!(pacing.months_available, 13);
    assert!(pacing.on_track);
    assert_eq!(pacing.required_monthly_contribution, dec!(269.23));
    assert_eq!(pacing.progress_pct, dec!(65));
    assert!(!pacing.is_completed);
}

#[test]
fn test_goal_behind_schedule() {
    // 90 days is exactly 3 flat months
    let pacing =
        compute_pacing(dec!(5000), dec!(1000), date(2024, 4, 14), dec!(500), as_of()).unwrap();

    assert_eq!(pacing.months_available, 3);
    assert_eq!(pacing.months_needed, 8);
    assert!(!pacing.on_track);
    assert_eq!(pacing.required_monthly_contribution, dec!(1333.33));
    assert_eq!(pacing.progress_pct, dec!(20));
}

#[test]
fn test_partial_month_rounds_up() {
    // 31 days counts as two flat months
    let pacing =
        compute_pacing(dec!(1000), dec!(0), date(2024, 2, 15), dec!(500), as_of()).unwrap();

    assert_eq!(pacing.months_available, 2);
    assert_eq!(pacing.months_needed, 2);
    assert!(pacing.on_track);
}

#[test]
fn test_completed_goal() {
    let pacing =
        compute_pacing(dec!(2000), dec!(2400), date(2024, 6, 1), dec!(0), as_of()).unwrap();

    assert_eq!(pacing.remaining, Decimal::ZERO);
    assert_eq!(pacing.months_needed, 0);
    assert!(pacing.on_track);
    assert!(pacing.is_completed);
    assert_eq!(pacing.progress_pct, dec!(100));
    assert_eq!(pacing.required_monthly_contribution, Decimal::ZERO);
}

#[test]
fn test_zero_contribution_is_unreachable() {
    let err =
        compute_pacing(dec!(10000), dec!(6500), date(2025, 1, 15), dec!(0), as_of()).unwrap_err();

    assert_eq!(
        err,
        MetricsError::Unreachable {
            remaining: dec!(3500),
            required_monthly_contribution: dec!(269.23),
        }
    );
    assert_eq!(err.kind(), MetricsErrorKind::Unreachable);
}

#[test]
fn test_past_target_date() {
    let pacing =
        compute_pacing(dec!(1000), dec!(400), date(2023, 12, 1), dec!(100), as_of()).unwrap();

    assert!(pacing.months_available <= 0);
    assert!(!pacing.on_track);
    // Whole remainder is due now
    assert_eq!(pacing.required_monthly_contribution, dec!(600));
}

#[test]
fn test_invalid_inputs() {
    let cases = [
        (dec!(0), dec!(0), dec!(100)),
        (dec!(-100), dec!(0), dec!(100)),
        (dec!(1000), dec!(-1), dec!(100)),
        (dec!(1000), dec!(0), dec!(-100)),
    ];
    for (target, current, contribution) in cases {
        let err =
            compute_pacing(target, current, date(2025, 1, 15), contribution, as_of()).unwrap_err();
        assert_eq!(err.kind(), MetricsErrorKind::InvalidInput);
    }
}

#[test]
fn test_tiny_contribution_is_beyond_horizon() {
    let err = compute_pacing(
        dec!(10000000000),
        dec!(0),
        date(2025, 1, 1),
        Decimal::new(1, 28),
        date(2024, 1, 1),
    )
    .unwrap_err();

    assert_eq!(err.kind(), MetricsErrorKind::InvalidInput);
}

#[test]
fn test_progress_saturates_when_ratio_overflows() {
    let pacing = compute_pacing(
        Decimal::new(1, 28),
        dec!(1000),
        date(2025, 1, 15),
        dec!(0),
        as_of(),
    )
    .unwrap();

    assert!(pacing.is_completed);
    assert_eq!(pacing.progress_pct, dec!(100));
}

#[test]
fn test_pace_goal_reads_the_record() {
    let goal = create_test_goal(dec!(10000), dec!(6500), dec!(500));
    let from_record = pace_goal(&goal, as_of()).unwrap();
    let direct =
        compute_pacing(dec!(10000), dec!(6500), date(2025, 1, 15), dec!(500), as_of()).unwrap();

    assert_eq!(from_record, direct);
}
