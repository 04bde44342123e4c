use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use super::attendance::AttendanceSet;
use crate::model::{AttendanceCounts, CalendarCell, DayStatus};
use crate::utils::date_range::DateRange;

pub const WEEK_LEN: usize = 7;

/// Lays classified days out for a Sunday-first, seven-column grid.
///
/// The output starts with one padding cell per column before `first_weekday`,
/// followed by one cell per day in input order.
pub fn build_grid<I>(days: I, first_weekday: Weekday) -> Vec<CalendarCell>
where
    I: IntoIterator<Item = (NaiveDate, DayStatus)>,
{
    let padding = first_weekday.num_days_from_sunday() as usize;
    let days = days.into_iter();

    let mut cells = Vec::with_capacity(padding + days.size_hint().0);
    cells.extend(std::iter::repeat_n(CalendarCell::Padding, padding));
    cells.extend(days.map(|(date, status)| CalendarCell::Day { date, status }));
    cells
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarGrid {
    pub range: DateRange,
    pub first_weekday: u32,
    pub cells: Vec<CalendarCell>,
    #[serde(flatten)]
    pub counts: AttendanceCounts,
}

impl CalendarGrid {
    pub fn from_attendance(set: &AttendanceSet) -> Self {
        let range = set.range();
        let first_weekday = range.start().weekday();
        Self {
            range,
            first_weekday: first_weekday.num_days_from_sunday(),
            cells: build_grid(set.classified(), first_weekday),
            counts: set.counts(),
        }
    }

    /// Rows of at most seven cells; the last row may be short.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(WEEK_LEN)
    }

    pub fn padding_len(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_padding()).count()
    }
}
