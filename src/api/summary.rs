use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};
use utoipa::ToSchema;

use super::reference_day;
use crate::config::Config;
use crate::model::{Role, WorkRecord};
use crate::report::{Granularity, GroupBy, rank_for_granularity, summarize, time_buckets};
use crate::utils::date_range::RangeQuery;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    #[schema(example = "65a1f0c2")]
    #[serde(default)]
    pub employee_id: Option<String>,

    /// Declared role of the employee; omit for an admin aggregate
    #[serde(default)]
    pub role: Option<Role>,

    #[schema(example = "2025-01-31", value_type = Option<String>, format = "date")]
    #[serde(default)]
    pub today: Option<NaiveDate>,

    /// Omit both `days` and `from/to` to summarize every record
    #[serde(default)]
    pub range: RangeQuery,

    #[schema(value_type = Object)]
    #[serde(default)]
    pub records: Vec<WorkRecord>,
}

fn for_employee<'a>(
    records: &'a [WorkRecord],
    employee_id: Option<&'a str>,
) -> impl Iterator<Item = &'a WorkRecord> {
    records
        .iter()
        .filter(move |record| employee_id.is_none_or(|id| record.employee_id == id))
}

/// Work summary card
#[utoipa::path(
    post,
    path = "/api/v1/summary",
    request_body = SummaryRequest,
    responses(
        (status = 200, description = "Attendance counts, hours and deliverable totals", body = Object, example = json!({
            "presentCount": 3, "absentCount": 0, "leaveCount": 0,
            "recordCount": 3,
            "totalHours": 15.0,
            "averageHours": 5.0,
            "roleTotal": { "role": "web_developer", "total": 4 },
            "breakdown": { "totalWebsites": 4, "totalDesigns": 0, "totalVideos": 0, "totalAdPlatforms": 0 }
        })),
        (status = 400, description = "Bad range query or range longer than MAX_RANGE_DAYS")
    ),
    tag = "Summary"
)]
pub async fn work_summary(
    config: web::Data<Config>,
    payload: web::Json<SummaryRequest>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let range = payload
        .range
        .resolve(reference_day(payload.today), config.max_range_days)?;

    let records = for_employee(&payload.records, payload.employee_id.as_deref());
    let summary = summarize(records, range, payload.role);

    if !summary.warnings.is_empty() {
        info!(
            warnings = summary.warnings.len(),
            employee_id = ?payload.employee_id,
            "Summary computed with skipped role totals"
        );
    }

    Ok(HttpResponse::Ok().json(summary))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BucketsRequest {
    #[schema(example = "65a1f0c2")]
    #[serde(default)]
    pub employee_id: Option<String>,

    /// Anchor day the windows end on
    #[schema(example = "2025-01-31", value_type = Option<String>, format = "date")]
    #[serde(default)]
    pub today: Option<NaiveDate>,

    #[schema(value_type = Object)]
    #[serde(default)]
    pub records: Vec<WorkRecord>,
}

/// Daily, weekly and monthly hours
#[utoipa::path(
    post,
    path = "/api/v1/summary/buckets",
    request_body = BucketsRequest,
    responses(
        (status = 200, description = "Hours for the anchor day, last 7 days and last 30 days", body = Object, example = json!({
            "anchor": "2025-01-31",
            "daily": { "hours": 6.0, "recordCount": 1 },
            "weekly": { "hours": 30.0, "recordCount": 5 },
            "monthly": { "hours": 120.0, "recordCount": 20 }
        }))
    ),
    tag = "Summary"
)]
pub async fn work_buckets(payload: web::Json<BucketsRequest>) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let anchor = reference_day(payload.today);

    let records = for_employee(&payload.records, payload.employee_id.as_deref());
    let buckets = time_buckets(records, anchor)?;

    Ok(HttpResponse::Ok().json(buckets))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankingRequest {
    pub group_by: GroupBy,

    pub granularity: Granularity,

    #[schema(example = "2025-01-31", value_type = Option<String>, format = "date")]
    #[serde(default)]
    pub today: Option<NaiveDate>,

    #[schema(value_type = Object)]
    #[serde(default)]
    pub records: Vec<WorkRecord>,
}

/// Leaderboard by hours
#[utoipa::path(
    post,
    path = "/api/v1/ranking",
    request_body = RankingRequest,
    responses(
        (status = 200, description = "Groups ordered by total hours, highest first", body = Object, example = json!([
            { "key": "web_developer", "totalHours": 42.0, "recordCount": 6 },
            { "key": "marketer", "totalHours": 30.5, "recordCount": 5 }
        ]))
    ),
    tag = "Summary"
)]
pub async fn ranking(payload: web::Json<RankingRequest>) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let anchor = reference_day(payload.today);

    let entries = rank_for_granularity(
        &payload.records,
        payload.group_by,
        payload.granularity,
        anchor,
    )?;

    debug!(
        granularity = payload.granularity.as_ref(),
        groups = entries.len(),
        "Ranked work records"
    );

    Ok(HttpResponse::Ok().json(entries))
}
