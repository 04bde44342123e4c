use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::model::SalaryRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPayroll {
    pub department: String,
    pub total_net: f64,
    pub employee_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySummary {
    pub total_base: f64,
    pub total_bonus: f64,
    pub total_deductions: f64,
    pub total_net: f64,
    pub employee_count: u32,
    pub by_department: Vec<DepartmentPayroll>,
}

/// Sums salary lines, optionally limited to the calendar month of `month`.
/// Departments are listed in the order they first appear.
pub fn summarize_salaries(records: &[SalaryRecord], month: Option<NaiveDate>) -> SalarySummary {
    let same_month =
        |d: NaiveDate| month.is_none_or(|m| m.year() == d.year() && m.month() == d.month());

    let mut summary = SalarySummary::default();
    let mut employees: HashSet<&str> = HashSet::new();
    let mut department_employees: HashMap<&str, HashSet<&str>> = HashMap::new();
    let mut department_index: HashMap<&str, usize> = HashMap::new();

    for record in records.iter().filter(|r| same_month(r.month)) {
        let net = record.net_salary();
        summary.total_base += record.base_salary;
        summary.total_bonus += record.bonus;
        summary.total_deductions += record.deductions;
        summary.total_net += net;
        employees.insert(record.employee_id.as_str());

        let slot = *department_index
            .entry(record.department.as_str())
            .or_insert_with(|| {
                summary.by_department.push(DepartmentPayroll {
                    department: record.department.clone(),
                    total_net: 0.0,
                    employee_count: 0,
                });
                summary.by_department.len() - 1
            });
        summary.by_department[slot].total_net += net;

        let seen = department_employees.entry(record.department.as_str()).or_default();
        if seen.insert(record.employee_id.as_str()) {
            summary.by_department[slot].employee_count += 1;
        }
    }

    summary.employee_count = employees.len() as u32;
    summary
}
