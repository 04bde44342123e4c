use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::model::SalaryRecord;
use crate::report::summarize_salaries;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalarySummaryRequest {
    /// Any day of the month to restrict to; omit for all lines
    #[schema(example = "2025-01-01", value_type = Option<String>, format = "date")]
    #[serde(default)]
    pub month: Option<NaiveDate>,

    pub salaries: Vec<SalaryRecord>,
}

/// Salary totals by department
#[utoipa::path(
    post,
    path = "/api/v1/salary/summary",
    request_body = SalarySummaryRequest,
    responses(
        (status = 200, description = "Salary aggregate", body = Object, example = json!({
            "totalBase": 120000.0,
            "totalBonus": 6000.0,
            "totalDeductions": 2500.0,
            "totalNet": 123500.0,
            "employeeCount": 3,
            "byDepartment": [
                { "department": "web_developer", "totalNet": 94000.0, "employeeCount": 2 },
                { "department": "marketer", "totalNet": 29500.0, "employeeCount": 1 }
            ]
        }))
    ),
    tag = "Payroll"
)]
pub async fn salary_summary(
    payload: web::Json<SalarySummaryRequest>,
) -> actix_web::Result<impl Responder> {
    let summary = summarize_salaries(&payload.salaries, payload.month);

    debug!(
        lines = payload.salaries.len(),
        departments = summary.by_department.len(),
        "Summarized salaries"
    );

    Ok(HttpResponse::Ok().json(summary))
}
