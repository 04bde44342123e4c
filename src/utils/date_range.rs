use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{DashboardError, DashboardResult};

/// Inclusive span of calendar days. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> DashboardResult<Self> {
        if start > end {
            return Err(DashboardError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// The `days` calendar days ending on `today`, `today` included.
    pub fn last_days(today: NaiveDate, days: u32) -> DashboardResult<Self> {
        if days == 0 {
            return Err(DashboardError::BadRequest(
                "days must be at least 1".to_string(),
            ));
        }
        let start = today
            .checked_sub_days(Days::new(u64::from(days - 1)))
            .ok_or_else(|| DashboardError::BadRequest(format!("days={days} is out of range")))?;
        Ok(Self { start, end: today })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    pub fn day_count(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Column of the first day in a Sunday-first week (0 = Sunday).
    pub fn first_weekday(&self) -> u32 {
        self.start.weekday().num_days_from_sunday()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    pub fn expand(&self) -> Vec<NaiveDate> {
        self.days().collect()
    }
}

/// Range selector sent by the dashboard: either `days` or a `from`/`to` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RangeQuery {
    #[schema(example = 7)]
    #[serde(default)]
    pub days: Option<u32>,

    #[schema(example = "2025-01-01", value_type = Option<String>, format = "date")]
    #[serde(default)]
    pub from: Option<NaiveDate>,

    #[schema(example = "2025-01-31", value_type = Option<String>, format = "date")]
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl RangeQuery {
    pub fn last_days(days: u32) -> Self {
        Self {
            days: Some(days),
            ..Self::default()
        }
    }

    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            days: None,
            from: Some(from),
            to: Some(to),
        }
    }

    /// `None` when the query names no range at all. Ranges longer than
    /// `max_days` are rejected.
    pub fn resolve(&self, today: NaiveDate, max_days: u32) -> DashboardResult<Option<DateRange>> {
        let range = match (self.days, self.from, self.to) {
            (None, None, None) => return Ok(None),
            (Some(days), None, None) => {
                if days > max_days {
                    return Err(too_long(max_days));
                }
                DateRange::last_days(today, days)?
            }
            (None, Some(from), Some(to)) => DateRange::new(from, to)?,
            (Some(_), _, _) => {
                return Err(DashboardError::BadRequest(
                    "days and from/to are mutually exclusive".to_string(),
                ));
            }
            (None, _, _) => {
                return Err(DashboardError::BadRequest(
                    "from and to must be given together".to_string(),
                ));
            }
        };

        if range.day_count() > max_days as usize {
            return Err(too_long(max_days));
        }
        Ok(Some(range))
    }

    pub fn resolve_or(
        &self,
        today: NaiveDate,
        default_days: u32,
        max_days: u32,
    ) -> DashboardResult<DateRange> {
        match self.resolve(today, max_days)? {
            Some(range) => Ok(range),
            None => DateRange::last_days(today, default_days),
        }
    }
}

fn too_long(max_days: u32) -> DashboardError {
    DashboardError::BadRequest(format!("range may span at most {max_days} days"))
}
