use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[schema(example = "c-102")]
    pub id: String,

    #[schema(example = "Rahim Uddin")]
    pub name: String,

    #[schema(example = "Dhaka")]
    pub location: String,

    #[schema(example = "Green Leaf Ltd", nullable = true)]
    #[serde(default)]
    pub company: Option<String>,
}
