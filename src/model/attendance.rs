use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};
use utoipa::ToSchema;

/// Attendance flag carried by a work record.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, ToSchema, AsRefStr, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Attendance {
    Present,
    Absent,
    Leave,
}

/// Calendar classification of a single day.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Present,
    Leave,
    Absent,
    None,
}

impl From<Attendance> for DayStatus {
    fn from(value: Attendance) -> Self {
        match value {
            Attendance::Present => DayStatus::Present,
            Attendance::Leave => DayStatus::Leave,
            Attendance::Absent => DayStatus::Absent,
        }
    }
}

/// One slot of the rendered month grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalendarCell {
    Padding,
    Day { date: NaiveDate, status: DayStatus },
}

impl CalendarCell {
    pub fn is_padding(&self) -> bool {
        matches!(self, CalendarCell::Padding)
    }
}
