use serde::{Deserialize, Serialize};

use super::role::Role;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCounts {
    pub present_count: u32,
    pub absent_count: u32,
    pub leave_count: u32,
}

/// Deliverable total for the declared role of the employee being summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "total", rename_all = "snake_case")]
pub enum RoleTotal {
    WebDeveloper(u32),
    GraphicDesigner(u32),
    VideoEditor(u32),
    Marketer(u32),
}

impl RoleTotal {
    pub fn value(&self) -> u32 {
        match *self {
            RoleTotal::WebDeveloper(n)
            | RoleTotal::GraphicDesigner(n)
            | RoleTotal::VideoEditor(n)
            | RoleTotal::Marketer(n) => n,
        }
    }
}

/// Deliverables per role across every record in scope, for admin views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBreakdown {
    pub total_websites: u32,
    pub total_designs: u32,
    pub total_videos: u32,
    pub total_ad_platforms: u32,
}

impl RoleBreakdown {
    pub fn add(&mut self, role: Role, count: u32) {
        match role {
            Role::WebDeveloper => self.total_websites += count,
            Role::GraphicDesigner => self.total_designs += count,
            Role::VideoEditor => self.total_videos += count,
            Role::Marketer => self.total_ad_platforms += count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryWarning {
    /// Record kept in generic totals but left out of role totals.
    #[serde(rename_all = "camelCase")]
    UnknownRole { record_id: String, role: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(flatten)]
    pub counts: AttendanceCounts,
    pub record_count: u32,
    pub total_hours: f64,
    pub average_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_total: Option<RoleTotal>,
    pub breakdown: RoleBreakdown,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<SummaryWarning>,
}
