pub mod attendance;
pub mod calendar;
pub mod policy;
pub mod ranking;
pub mod salary;
pub mod summary;

pub use attendance::{AttendanceSet, classify};
pub use calendar::{CalendarGrid, build_grid};
pub use policy::{BlockReason, Eligibility, SubmissionPolicy};
pub use ranking::{
    Granularity, GroupBy, RankEntry, TimeBuckets, rank, rank_for_granularity, time_buckets,
};
pub use salary::{SalarySummary, summarize_salaries};
pub use summary::summarize;
