use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use chrono::NaiveDate;
use thiserror::Error;

/// Failures of the report core and its HTTP surface.
///
/// An empty record list is not an error: every total comes back as zero.
/// Records with an unrecognised role are reported as
/// [`SummaryWarning::UnknownRole`](crate::model::SummaryWarning) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;

impl ResponseError for DashboardError {
    fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::InvalidRange { .. } | DashboardError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let message = self.to_string();

        tracing::warn!(status = %status_code, %message, "Request rejected");

        HttpResponse::build(status_code).json(serde_json::json!({ "message": message }))
    }
}
