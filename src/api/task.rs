use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::reference_day;
use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaskAction {
    Submit,
    Edit,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRequest {
    pub action: TaskAction,

    /// Work date of the task being submitted or edited
    #[schema(example = "2025-01-08", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "2025-01-08", value_type = Option<String>, format = "date")]
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Whether a daily task may be submitted or edited
#[utoipa::path(
    post,
    path = "/api/v1/tasks/eligibility",
    request_body = EligibilityRequest,
    responses(
        (status = 200, description = "Decision under the configured policy", body = Object, example = json!({
            "allowed": false,
            "reason": "locked_weekday"
        }))
    ),
    tag = "Task"
)]
pub async fn task_eligibility(
    config: web::Data<Config>,
    payload: web::Json<EligibilityRequest>,
) -> actix_web::Result<impl Responder> {
    let today = reference_day(payload.today);
    let policy = &config.submission_policy;

    let decision = match payload.action {
        TaskAction::Submit => policy.can_submit(payload.date, today),
        TaskAction::Edit => policy.can_edit(payload.date, today),
    };

    debug!(
        action = ?payload.action,
        date = %payload.date,
        %today,
        allowed = decision.allowed,
        reason = ?decision.reason,
        "Task eligibility checked"
    );

    Ok(HttpResponse::Ok().json(decision))
}
