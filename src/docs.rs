use crate::api::attendance::CalendarRequest;
use crate::api::client::ClientSearch;
use crate::api::employee::EmployeeSearch;
use crate::api::payroll::SalarySummaryRequest;
use crate::api::summary::{BucketsRequest, RankingRequest, SummaryRequest};
use crate::api::task::{EligibilityRequest, TaskAction};
use crate::model::{Attendance, Client, DayStatus, Employee, Role, SalaryRecord};
use crate::report::{Granularity, GroupBy};
use crate::utils::date_range::RangeQuery;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Digital Resolution Dashboard API",
        version = "1.0.0",
        description = r#"
## Digital Resolution agency dashboard

Report endpoints behind the admin and employee portals. Every request carries
the records it works on, as fetched from the system of record; nothing is stored.

### Key Features
- **Attendance**: calendar grid with present / leave / absent / none per day
- **Summary**: hours, attendance counts and deliverables per role
- **Ranking**: departments or employees ordered by hours (daily, weekly, monthly)
- **Employees & Clients**: case-insensitive search with pagination
- **Payroll**: salary totals per department
- **Tasks**: submission and edit window checks

### Response Format
- JSON with camelCase fields, dates as `YYYY-MM-DD`
- Errors as `{ "message": "..." }` with status 400
"#,
    ),
    paths(
        crate::api::attendance::attendance_calendar,

        crate::api::summary::work_summary,
        crate::api::summary::work_buckets,
        crate::api::summary::ranking,

        crate::api::employee::search_employees,
        crate::api::client::search_clients,

        crate::api::payroll::salary_summary,

        crate::api::task::task_eligibility
    ),
    components(
        schemas(
            CalendarRequest,
            SummaryRequest,
            BucketsRequest,
            RankingRequest,
            EmployeeSearch,
            ClientSearch,
            SalarySummaryRequest,
            EligibilityRequest,
            TaskAction,
            RangeQuery,
            Role,
            Attendance,
            DayStatus,
            Granularity,
            GroupBy,
            Employee,
            Client,
            SalaryRecord
        )
    ),
    tags(
        (name = "Attendance", description = "Attendance calendar APIs"),
        (name = "Summary", description = "Work summary and ranking APIs"),
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Client", description = "Client directory APIs"),
        (name = "Payroll", description = "Salary aggregation APIs"),
        (name = "Task", description = "Daily task policy APIs"),
    )
)]
pub struct ApiDoc;
