use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Employee specialty. Decides which deliverable count a task record tracks.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    WebDeveloper,
    GraphicDesigner,
    VideoEditor,
    Marketer,
}

/// Role label as it arrives from the backend. Labels this build does not know
/// are kept verbatim so they still count toward generic totals.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleTag {
    Known(Role),
    Unknown(String),
}

impl RoleTag {
    pub fn known(&self) -> Option<Role> {
        match self {
            RoleTag::Known(role) => Some(*role),
            RoleTag::Unknown(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RoleTag::Known(role) => role.as_ref(),
            RoleTag::Unknown(raw) => raw,
        }
    }
}

impl From<Role> for RoleTag {
    fn from(role: Role) -> Self {
        RoleTag::Known(role)
    }
}

impl From<&str> for RoleTag {
    fn from(raw: &str) -> Self {
        raw.parse::<Role>()
            .map(RoleTag::Known)
            .unwrap_or_else(|_| RoleTag::Unknown(raw.to_string()))
    }
}
