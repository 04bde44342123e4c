use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};
use utoipa::ToSchema;

use crate::error::DashboardResult;
use crate::model::WorkRecord;
use crate::utils::date_range::DateRange;

/// Dashboard time bucket. Each is a trailing window ending on the anchor day.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, ToSchema, AsRefStr, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    pub fn days(self) -> u32 {
        match self {
            Granularity::Daily => 1,
            Granularity::Weekly => 7,
            Granularity::Monthly => 30,
        }
    }

    pub fn window(self, anchor: NaiveDate) -> DashboardResult<DateRange> {
        DateRange::last_days(anchor, self.days())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    Department,
    Employee,
}

impl GroupBy {
    fn key<'a>(self, record: &'a WorkRecord) -> &'a str {
        match self {
            GroupBy::Department => record.role.label(),
            GroupBy::Employee => &record.employee_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub hours: f64,
    pub record_count: u32,
}

impl Bucket {
    fn push(&mut self, record: &WorkRecord) {
        self.hours += record.hours;
        self.record_count += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBuckets {
    pub anchor: NaiveDate,
    pub daily: Bucket,
    pub weekly: Bucket,
    pub monthly: Bucket,
}

/// Hours worked today, over the last 7 days, and over the last 30 days.
pub fn time_buckets<'a, I>(records: I, anchor: NaiveDate) -> DashboardResult<TimeBuckets>
where
    I: IntoIterator<Item = &'a WorkRecord>,
{
    let daily_window = Granularity::Daily.window(anchor)?;
    let weekly_window = Granularity::Weekly.window(anchor)?;
    let monthly_window = Granularity::Monthly.window(anchor)?;

    let mut buckets = TimeBuckets {
        anchor,
        daily: Bucket::default(),
        weekly: Bucket::default(),
        monthly: Bucket::default(),
    };

    for record in records {
        if daily_window.contains(record.date) {
            buckets.daily.push(record);
        }
        if weekly_window.contains(record.date) {
            buckets.weekly.push(record);
        }
        if monthly_window.contains(record.date) {
            buckets.monthly.push(record);
        }
    }

    Ok(buckets)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankEntry {
    pub key: String,
    pub total_hours: f64,
    pub record_count: u32,
}

/// Groups in-range records and orders the groups by total hours, highest first.
/// Equal totals keep the order in which their key first appeared.
pub fn rank<'a, I>(records: I, group_by: GroupBy, range: DateRange) -> Vec<RankEntry>
where
    I: IntoIterator<Item = &'a WorkRecord>,
{
    let mut entries: Vec<RankEntry> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for record in records {
        if !range.contains(record.date) {
            continue;
        }
        let key = group_by.key(record);
        let slot = *index.entry(key).or_insert_with(|| {
            entries.push(RankEntry {
                key: key.to_string(),
                total_hours: 0.0,
                record_count: 0,
            });
            entries.len() - 1
        });
        entries[slot].total_hours += record.hours;
        entries[slot].record_count += 1;
    }

    entries.sort_by(|a, b| b.total_hours.total_cmp(&a.total_hours));
    entries
}

pub fn rank_for_granularity<'a, I>(
    records: I,
    group_by: GroupBy,
    granularity: Granularity,
    anchor: NaiveDate,
) -> DashboardResult<Vec<RankEntry>>
where
    I: IntoIterator<Item = &'a WorkRecord>,
{
    Ok(rank(records, group_by, granularity.window(anchor)?))
}
