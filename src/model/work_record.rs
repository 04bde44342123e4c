use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::attendance::Attendance;
use super::role::{Role, RoleTag};

/// One employee's submitted task for one day, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRecord {
    pub id: String,
    pub employee_id: String,
    pub role: RoleTag,
    pub date: NaiveDate,
    #[serde(default)]
    pub hours: f64,
    pub attendance: Attendance,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_websites: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_designs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_videos: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ad_platforms: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl WorkRecord {
    /// Deliverable count tracked for `role`, read from the matching field.
    pub fn deliverables(&self, role: Role) -> u32 {
        match role {
            Role::WebDeveloper => self.number_of_websites.unwrap_or(0),
            Role::GraphicDesigner => self.number_of_designs.unwrap_or(0),
            Role::VideoEditor => self.number_of_videos.unwrap_or(0),
            Role::Marketer => self.ad_platforms.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_backend_shape() {
        let record: WorkRecord = serde_json::from_str(
            r#"{
                "id": "t-1",
                "employeeId": "e-7",
                "role": "marketer",
                "date": "2025-01-03",
                "hours": 7.5,
                "attendance": "present",
                "adPlatforms": ["facebook", "google"],
                "companyName": "Acme"
            }"#,
        )
        .unwrap();

        assert_eq!(record.role, RoleTag::Known(Role::Marketer));
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
        assert_eq!(record.deliverables(Role::Marketer), 2);
        assert_eq!(record.deliverables(Role::WebDeveloper), 0);
        assert_eq!(record.company_name.as_deref(), Some("Acme"));
    }
}
