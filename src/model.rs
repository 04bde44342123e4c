pub mod attendance;
pub mod client;
pub mod employee;
pub mod payroll;
pub mod role;
pub mod summary;
pub mod work_record;

pub use attendance::{Attendance, CalendarCell, DayStatus};
pub use client::Client;
pub use employee::Employee;
pub use payroll::SalaryRecord;
pub use role::{Role, RoleTag};
pub use summary::{AttendanceCounts, RoleBreakdown, RoleTotal, Summary, SummaryWarning};
pub use work_record::WorkRecord;
