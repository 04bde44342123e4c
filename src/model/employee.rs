use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": "65a1f0c2",
        "name": "Nusrat Jahan",
        "email": "nusrat@digitalresolution.com",
        "department": "web_developer",
        "designation": "Frontend Developer"
    })
)]
pub struct Employee {
    #[schema(example = "65a1f0c2")]
    pub id: String,

    #[schema(example = "Nusrat Jahan")]
    pub name: String,

    #[schema(example = "nusrat@digitalresolution.com", nullable = true)]
    #[serde(default)]
    pub email: Option<String>,

    #[schema(example = "web_developer")]
    pub department: String,

    #[schema(example = "Frontend Developer", nullable = true)]
    #[serde(default)]
    pub designation: Option<String>,
}
