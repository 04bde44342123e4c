use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::config::Config;
use crate::model::Employee;
use crate::utils::pagination::paginate;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSearch {
    #[schema(example = 1)]
    pub page: Option<u32>,
    #[schema(example = 10)]
    pub per_page: Option<u32>,
    /// Matched against name, department and email, ignoring case
    #[schema(example = "designer")]
    pub search: Option<String>,
    pub employees: Vec<Employee>,
}

/// Search and paginate employees
#[utoipa::path(
    post,
    path = "/api/v1/employees/search",
    request_body = EmployeeSearch,
    responses(
        (status = 200, description = "Paginated employee list", body = Object, example = json!({
            "data": [{
                "id": "65a1f0c2",
                "name": "Nusrat Jahan",
                "email": "nusrat@digitalresolution.com",
                "department": "web_developer",
                "designation": "Frontend Developer"
            }],
            "page": 1,
            "perPage": 10,
            "total": 1,
            "totalPages": 1
        }))
    ),
    tag = "Employee"
)]
pub async fn search_employees(
    config: web::Data<Config>,
    query: web::Json<EmployeeSearch>,
) -> actix_web::Result<impl Responder> {
    let page = query.page.unwrap_or(1);
    let per_page = config.clamp_page_size(query.per_page);
    let search = query.search.as_deref().unwrap_or_default();

    debug!(page, per_page, search, candidates = query.employees.len(), "Searching employees");

    let result = paginate(&query.employees, search, per_page, page)?;

    Ok(HttpResponse::Ok().json(result))
}
