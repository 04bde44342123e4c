use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

use super::reference_day;
use crate::config::Config;
use crate::model::{Attendance, WorkRecord};
use crate::report::{AttendanceSet, CalendarGrid};
use crate::utils::date_range::RangeQuery;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarRequest {
    /// Only records of this employee are used when set
    #[schema(example = "65a1f0c2")]
    #[serde(default)]
    pub employee_id: Option<String>,

    #[schema(example = "2025-01-07", value_type = Option<String>, format = "date")]
    #[serde(default)]
    pub today: Option<NaiveDate>,

    #[serde(default)]
    pub range: RangeQuery,

    #[schema(value_type = Object)]
    #[serde(default)]
    pub records: Vec<WorkRecord>,

    #[schema(value_type = Vec<String>, example = json!(["2025-01-01", "2025-01-02"]))]
    #[serde(default)]
    pub present_days: Vec<NaiveDate>,

    #[schema(value_type = Vec<String>, example = json!(["2025-01-04"]))]
    #[serde(default)]
    pub leave_days: Vec<NaiveDate>,

    #[schema(value_type = Vec<String>, example = json!([]))]
    #[serde(default)]
    pub absent_days: Vec<NaiveDate>,
}

/// Attendance calendar for one employee
#[utoipa::path(
    post,
    path = "/api/v1/attendance/calendar",
    request_body = CalendarRequest,
    responses(
        (status = 200, description = "Month grid with leading padding cells", body = Object, example = json!({
            "range": { "start": "2025-01-01", "end": "2025-01-02" },
            "firstWeekday": 3,
            "cells": [
                { "kind": "padding" }, { "kind": "padding" }, { "kind": "padding" },
                { "kind": "day", "date": "2025-01-01", "status": "present" },
                { "kind": "day", "date": "2025-01-02", "status": "none" }
            ],
            "presentCount": 1, "absentCount": 0, "leaveCount": 0
        })),
        (status = 400, description = "Invalid range", body = Object, example = json!({
            "message": "Invalid range: start 2025-01-07 is after end 2025-01-01"
        }))
    ),
    tag = "Attendance"
)]
pub async fn attendance_calendar(
    config: web::Data<Config>,
    payload: web::Json<CalendarRequest>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let today = reference_day(payload.today);
    let range =
        payload
            .range
            .resolve_or(today, config.default_range_days, config.max_range_days)?;

    let records = payload.records.iter().filter(|record| {
        payload
            .employee_id
            .as_deref()
            .is_none_or(|id| record.employee_id == id)
    });
    let mut set = AttendanceSet::from_records(records, range);

    let day_lists = [
        (&payload.present_days, Attendance::Present),
        (&payload.leave_days, Attendance::Leave),
        (&payload.absent_days, Attendance::Absent),
    ];
    for (days, value) in day_lists {
        for day in days {
            set.mark(*day, value);
        }
    }

    let grid = CalendarGrid::from_attendance(&set);
    debug!(
        start = %range.start(),
        end = %range.end(),
        cells = grid.cells.len(),
        "Built attendance calendar"
    );

    Ok(HttpResponse::Ok().json(grid))
}
