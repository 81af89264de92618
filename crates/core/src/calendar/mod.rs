//! Calendar module - recurrence frequencies, pay periods, and day counting.

mod calendar_model;
mod day_count;

pub use calendar_model::{BillFrequency, DateRange, Frequency};
pub use day_count::{
    add_months, ceil_days_between, days_until, flat_months_ceil, shift_days, shift_months,
};
