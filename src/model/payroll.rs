use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Salary line for one employee and one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    #[schema(example = "65a1f0c2")]
    pub employee_id: String,

    #[schema(example = "graphic_designer")]
    pub department: String,

    #[schema(example = "2025-01-01", value_type = String, format = "date")]
    pub month: NaiveDate,

    #[schema(example = 50000.0)]
    pub base_salary: f64,

    #[schema(example = 5000.0)]
    #[serde(default)]
    pub bonus: f64,

    #[schema(example = 2000.0)]
    #[serde(default)]
    pub deductions: f64,
}

impl SalaryRecord {
    pub fn net_salary(&self) -> f64 {
        self.base_salary + self.bonus - self.deductions
    }
}
