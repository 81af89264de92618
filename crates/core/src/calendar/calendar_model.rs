//! Recurrence and period models.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::day_count::{days_until, shift_days, shift_months};

/// How often a budget's income arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
    Yearly,
}

/// Length of one period, either a fixed number of days or calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Days(i64),
    Months(i64),
}

impl Frequency {
    /// Number of periods in a year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Weekly => 52,
            Frequency::BiWeekly => 26,
            Frequency::Monthly => 12,
            Frequency::Quarterly => 4,
            Frequency::Yearly => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Weekly => "Weekly",
            Frequency::BiWeekly => "Bi-weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Yearly => "Yearly",
        }
    }

    fn step(&self) -> Step {
        match self {
            Frequency::Weekly => Step::Days(7),
            Frequency::BiWeekly => Step::Days(14),
            Frequency::Monthly => Step::Months(1),
            Frequency::Quarterly => Step::Months(3),
            Frequency::Yearly => Step::Months(12),
        }
    }

    /// Returns the pay period containing `as_of`, with periods anchored on
    /// `anchor` (the first pay date).
    ///
    /// Periods are half-open: a date equal to the next period's start belongs
    /// to the next period. Anchors after `as_of` yield earlier periods.
    /// Month-based periods are counted from the anchor so a day-31 anchor
    /// clamps to shorter months without drifting.
    pub fn period_containing(&self, anchor: NaiveDate, as_of: NaiveDate) -> DateRange {
        match self.step() {
            Step::Days(length) => {
                let index = days_until(anchor, as_of).div_euclid(length);
                let start = shift_days(anchor, index * length);
                DateRange::new(start, shift_days(start, length))
            }
            Step::Months(length) => {
                let elapsed = i64::from(as_of.year() - anchor.year()) * 12
                    + i64::from(as_of.month())
                    - i64::from(anchor.month());
                let mut index = elapsed.div_euclid(length);
                while shift_months(anchor, index * length) > as_of {
                    index -= 1;
                }
                while shift_months(anchor, (index + 1) * length) <= as_of {
                    index += 1;
                }
                DateRange::new(
                    shift_months(anchor, index * length),
                    shift_months(anchor, (index + 1) * length),
                )
            }
        }
    }
}

/// How often a bill recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillFrequency {
    OneTime,
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl BillFrequency {
    /// The equivalent recurring frequency, `None` for one-time bills.
    pub fn as_frequency(&self) -> Option<Frequency> {
        match self {
            BillFrequency::OneTime => None,
            BillFrequency::Weekly => Some(Frequency::Weekly),
            BillFrequency::BiWeekly => Some(Frequency::BiWeekly),
            BillFrequency::Monthly => Some(Frequency::Monthly),
            BillFrequency::Quarterly => Some(Frequency::Quarterly),
            BillFrequency::Yearly => Some(Frequency::Yearly),
        }
    }
}

/// A half-open date interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// First day of the period (inclusive)
    pub start: NaiveDate,
    /// First day of the following period (exclusive)
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The calendar month containing `date`.
    pub fn calendar_month(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        Self::new(start, shift_months(start, 1))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    pub fn length_days(&self) -> i64 {
        days_until(self.start, self.end)
    }

    /// Days from `as_of` until the period ends, never negative.
    pub fn days_remaining(&self, as_of: NaiveDate) -> i64 {
        days_until(as_of, self.end).max(0)
    }
}
