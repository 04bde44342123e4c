use std::collections::{BTreeSet, HashSet};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// When employees may submit or change a daily task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPolicy {
    pub locked_weekdays: HashSet<Weekday>,
    pub holidays: BTreeSet<NaiveDate>,
    /// Days after the work date during which the record stays editable.
    pub edit_window_days: u32,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            locked_weekdays: HashSet::from([Weekday::Fri]),
            holidays: BTreeSet::new(),
            edit_window_days: 0,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    FutureDate,
    LockedWeekday,
    Holiday,
    EditWindowClosed,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct Eligibility {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<BlockReason>,
}

impl Eligibility {
    fn allowed() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    fn blocked(reason: BlockReason) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }
}

impl SubmissionPolicy {
    pub fn can_submit(&self, date: NaiveDate, today: NaiveDate) -> Eligibility {
        if date > today {
            Eligibility::blocked(BlockReason::FutureDate)
        } else if self.locked_weekdays.contains(&date.weekday()) {
            Eligibility::blocked(BlockReason::LockedWeekday)
        } else if self.holidays.contains(&date) {
            Eligibility::blocked(BlockReason::Holiday)
        } else {
            Eligibility::allowed()
        }
    }

    pub fn can_edit(&self, record_date: NaiveDate, today: NaiveDate) -> Eligibility {
        if record_date > today {
            return Eligibility::blocked(BlockReason::FutureDate);
        }
        self.within_edit_window(record_date, today)
    }

    fn within_edit_window(&self, date: NaiveDate, today: NaiveDate) -> Eligibility {
        let age = (today - date).num_days();
        if age <= i64::from(self.edit_window_days) {
            Eligibility::allowed()
        } else {
            Eligibility::blocked(BlockReason::EditWindowClosed)
        }
    }
}
