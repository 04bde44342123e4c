use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::warn;

use crate::model::{Attendance, AttendanceCounts, DayStatus, WorkRecord};
use crate::utils::date_range::DateRange;

/// Classifies `day` against the three day-sets returned by the backend.
///
/// Should a day sit in several sets, present wins over leave, and leave over absent.
pub fn classify(
    day: NaiveDate,
    present: &BTreeSet<NaiveDate>,
    leave: &BTreeSet<NaiveDate>,
    absent: &BTreeSet<NaiveDate>,
) -> DayStatus {
    if present.contains(&day) {
        DayStatus::Present
    } else if leave.contains(&day) {
        DayStatus::Leave
    } else if absent.contains(&day) {
        DayStatus::Absent
    } else {
        DayStatus::None
    }
}

fn precedence(value: Attendance) -> u8 {
    match value {
        Attendance::Present => 0,
        Attendance::Leave => 1,
        Attendance::Absent => 2,
    }
}

/// Per-day attendance of one employee over one range.
///
/// Each day holds at most one status, so present/leave/absent are disjoint
/// by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceSet {
    range: DateRange,
    days: BTreeMap<NaiveDate, Attendance>,
}

impl AttendanceSet {
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            days: BTreeMap::new(),
        }
    }

    /// Builds the set from task records. Records outside `range` are ignored.
    pub fn from_records<'a, I>(records: I, range: DateRange) -> Self
    where
        I: IntoIterator<Item = &'a WorkRecord>,
    {
        let mut set = Self::new(range);
        for record in records {
            set.mark(record.date, record.attendance);
        }
        set
    }

    /// Builds the set from the backend's three day lists.
    pub fn from_day_sets(
        range: DateRange,
        present: &[NaiveDate],
        leave: &[NaiveDate],
        absent: &[NaiveDate],
    ) -> Self {
        let mut set = Self::new(range);
        let tagged = [
            (present, Attendance::Present),
            (leave, Attendance::Leave),
            (absent, Attendance::Absent),
        ];
        for (days, value) in tagged {
            for day in days {
                set.mark(*day, value);
            }
        }
        set
    }

    /// Records `value` for `day`, keeping the higher-precedence status on conflict.
    pub fn mark(&mut self, day: NaiveDate, value: Attendance) {
        if !self.range.contains(day) {
            return;
        }
        match self.days.get(&day).copied() {
            None => {
                self.days.insert(day, value);
            }
            Some(existing) if existing == value => {}
            Some(existing) => {
                let kept = if precedence(value) < precedence(existing) {
                    value
                } else {
                    existing
                };
                warn!(
                    %day,
                    existing = existing.as_ref(),
                    incoming = value.as_ref(),
                    kept = kept.as_ref(),
                    "Conflicting attendance for one day"
                );
                self.days.insert(day, kept);
            }
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn status(&self, day: NaiveDate) -> DayStatus {
        self.days
            .get(&day)
            .copied()
            .map(DayStatus::from)
            .unwrap_or(DayStatus::None)
    }

    pub fn days_with(&self, value: Attendance) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days
            .iter()
            .filter(move |(_, v)| **v == value)
            .map(|(day, _)| *day)
    }

    pub fn present_days(&self) -> Vec<NaiveDate> {
        self.days_with(Attendance::Present).collect()
    }

    pub fn leave_days(&self) -> Vec<NaiveDate> {
        self.days_with(Attendance::Leave).collect()
    }

    pub fn absent_days(&self) -> Vec<NaiveDate> {
        self.days_with(Attendance::Absent).collect()
    }

    /// Day counts per status. Unrecorded days are not counted.
    pub fn counts(&self) -> AttendanceCounts {
        let mut counts = AttendanceCounts::default();
        for value in self.days.values() {
            match value {
                Attendance::Present => counts.present_count += 1,
                Attendance::Absent => counts.absent_count += 1,
                Attendance::Leave => counts.leave_count += 1,
            }
        }
        counts
    }

    /// Every day of the range paired with its status, in date order.
    pub fn classified(&self) -> Vec<(NaiveDate, DayStatus)> {
        self.range.days().map(|day| (day, self.status(day))).collect()
    }
}
