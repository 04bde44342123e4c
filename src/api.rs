pub mod attendance;
pub mod client;
pub mod employee;
pub mod payroll;
pub mod summary;
pub mod task;

use chrono::{Local, NaiveDate};

/// Reference day for relative ranges. Requests may pin it; otherwise the server's local date.
pub(crate) fn reference_day(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}
