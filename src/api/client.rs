use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::config::Config;
use crate::model::Client;
use crate::utils::pagination::paginate;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientSearch {
    #[schema(example = 1)]
    pub page: Option<u32>,
    #[schema(example = 10)]
    pub per_page: Option<u32>,
    /// Matched against name, location and company, ignoring case
    #[schema(example = "dhaka")]
    pub search: Option<String>,
    pub clients: Vec<Client>,
}

/// Search and paginate clients
#[utoipa::path(
    post,
    path = "/api/v1/clients/search",
    request_body = ClientSearch,
    responses(
        (status = 200, description = "Paginated client list", body = Object, example = json!({
            "data": [{ "id": "c-102", "name": "Rahim Uddin", "location": "Dhaka", "company": "Green Leaf Ltd" }],
            "page": 1,
            "perPage": 10,
            "total": 1,
            "totalPages": 1
        }))
    ),
    tag = "Client"
)]
pub async fn search_clients(
    config: web::Data<Config>,
    query: web::Json<ClientSearch>,
) -> actix_web::Result<impl Responder> {
    let page = query.page.unwrap_or(1);
    let per_page = config.clamp_page_size(query.per_page);
    let search = query.search.as_deref().unwrap_or_default();

    debug!(page, per_page, search, candidates = query.clients.len(), "Searching clients");

    let result = paginate(&query.clients, search, per_page, page)?;

    Ok(HttpResponse::Ok().json(result))
}
