use tracing::warn;

use crate::model::{
    Attendance, AttendanceCounts, Role, RoleBreakdown, RoleTag, RoleTotal, Summary,
    SummaryWarning, WorkRecord,
};
use crate::utils::date_range::DateRange;

/// Folds task records into dashboard totals.
///
/// Only records dated inside `range` are counted (all of them when `range` is
/// `None`). `role` is the declared role of the employee being summarized and
/// selects `role_total`; admin views pass `None` and read `breakdown` instead.
/// Records whose role is not recognised still count toward attendance and
/// hours, are left out of role totals, and are reported in `warnings`.
pub fn summarize<'a, I>(records: I, range: Option<DateRange>, role: Option<Role>) -> Summary
where
    I: IntoIterator<Item = &'a WorkRecord>,
{
    let mut counts = AttendanceCounts::default();
    let mut breakdown = RoleBreakdown::default();
    let mut warnings = Vec::new();
    let mut record_count = 0u32;
    let mut total_hours = 0.0;

    let in_range = records
        .into_iter()
        .filter(|record| range.is_none_or(|r| r.contains(record.date)));

    for record in in_range {
        record_count += 1;
        total_hours += record.hours;

        match record.attendance {
            Attendance::Present => counts.present_count += 1,
            Attendance::Absent => counts.absent_count += 1,
            Attendance::Leave => counts.leave_count += 1,
        }

        match &record.role {
            RoleTag::Known(known) => breakdown.add(*known, record.deliverables(*known)),
            RoleTag::Unknown(raw) => {
                warn!(record_id = %record.id, role = %raw, "Record has unknown role");
                warnings.push(SummaryWarning::UnknownRole {
                    record_id: record.id.clone(),
                    role: raw.clone(),
                });
            }
        }
    }

    let average_hours = if record_count == 0 {
        0.0
    } else {
        total_hours / f64::from(record_count)
    };

    Summary {
        counts,
        record_count,
        total_hours,
        average_hours,
        role_total: role.map(|role| role_total(&breakdown, role)),
        breakdown,
        warnings,
    }
}

fn role_total(breakdown: &RoleBreakdown, role: Role) -> RoleTotal {
    match role {
        Role::WebDeveloper => RoleTotal::WebDeveloper(breakdown.total_websites),
        Role::GraphicDesigner => RoleTotal::GraphicDesigner(breakdown.total_designs),
        Role::VideoEditor => RoleTotal::VideoEditor(breakdown.total_videos),
        Role::Marketer => RoleTotal::Marketer(breakdown.total_ad_platforms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn jan(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn task(id: &str, role: &str, date: NaiveDate, hours: f64) -> WorkRecord {
        WorkRecord {
            id: id.to_string(),
            employee_id: "e-1".into(),
            role: RoleTag::from(role),
            date,
            hours,
            attendance: Attendance::Present,
            number_of_websites: None,
            number_of_designs: None,
            number_of_videos: None,
            ad_platforms: Vec::new(),
            project_name: None,
            company_name: None,
        }
    }

    fn websites(id: &str, date: NaiveDate, hours: f64, sites: u32) -> WorkRecord {
        WorkRecord {
            number_of_websites: Some(sites),
            ..task(id, "web_developer", date, hours)
        }
    }

    #[test]
    fn web_developer_totals() {
        let records = vec![
            websites("a", jan(1), 4.0, 1),
            websites("b", jan(2), 6.0, 2),
            websites("c", jan(3), 5.0, 1),
        ];

        let summary = summarize(&records, None, Some(Role::WebDeveloper));

        assert_eq!(summary.total_hours, 15.0);
        assert_eq!(summary.average_hours, 5.0);
        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.role_total, Some(RoleTotal::WebDeveloper(4)));
        assert_eq!(summary.counts.present_count, 3);
        assert!(summary.warnings.is_empty());
    }

    #[test]
    fn empty_input_is_all_zero() {
        let records: Vec<WorkRecord> = Vec::new();
        let summary = summarize(&records, None, Some(Role::Marketer));

        assert_eq!(summary.total_hours, 0.0);
        assert_eq!(summary.average_hours, 0.0);
        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.counts, AttendanceCounts::default());
        assert_eq!(summary.role_total, Some(RoleTotal::Marketer(0)));
    }

    #[test]
    fn records_outside_range_are_excluded() {
        let records = vec![
            websites("a", jan(1), 4.0, 1),
            websites("b", jan(5), 6.0, 2),
            websites("c", jan(9), 5.0, 1),
        ];
        let range = DateRange::new(jan(2), jan(8)).unwrap();

        let summary = summarize(&records, Some(range), Some(Role::WebDeveloper));

        assert_eq!(summary.record_count, 1);
        assert_eq!(summary.total_hours, 6.0);
        assert_eq!(summary.role_total, Some(RoleTotal::WebDeveloper(2)));
    }

    #[test]
    fn attendance_values_are_counted_per_record() {
        let mut records = vec![
            task("a", "video_editor", jan(1), 8.0),
            task("b", "video_editor", jan(2), 0.0),
            task("c", "video_editor", jan(3), 0.0),
        ];
        records[1].attendance = Attendance::Leave;
        records[2].attendance = Attendance::Absent;

        let summary = summarize(&records, None, Some(Role::VideoEditor));
        assert_eq!(
            summary.counts,
            AttendanceCounts {
                present_count: 1,
                absent_count: 1,
                leave_count: 1,
            }
        );
    }

    #[test]
    fn unknown_role_counts_hours_but_not_deliverables() {
        let mut stray = task("x", "sound_engineer", jan(2), 3.0);
        stray.number_of_websites = Some(9);
        let records = vec![websites("a", jan(1), 4.0, 1), stray];

        let summary = summarize(&records, None, Some(Role::WebDeveloper));

        assert_eq!(summary.total_hours, 7.0);
        assert_eq!(summary.record_count, 2);
        assert_eq!(summary.role_total, Some(RoleTotal::WebDeveloper(1)));
        assert_eq!(
            summary.warnings,
            vec![SummaryWarning::UnknownRole {
                record_id: "x".into(),
                role: "sound_engineer".into(),
            }]
        );
    }

    #[test]
    fn admin_breakdown_spans_roles() {
        let mut design = task("d", "graphic_designer", jan(1), 5.0);
        design.number_of_designs = Some(3);
        let mut video = task("v", "video_editor", jan(1), 5.0);
        video.number_of_videos = Some(2);
        let mut ads = task("m", "marketer", jan(1), 2.0);
        ads.ad_platforms = vec!["facebook".into(), "tiktok".into(), "google".into()];
        let records = vec![websites("w", jan(1), 6.0, 2), design, video, ads];

        let summary = summarize(&records, None, None);

        assert_eq!(summary.role_total, None);
        assert_eq!(
            summary.breakdown,
            RoleBreakdown {
                total_websites: 2,
                total_designs: 3,
                total_videos: 2,
                total_ad_platforms: 3,
            }
        );
        assert_eq!(summary.average_hours, 4.5);
    }

    #[test]
    fn each_role_reads_its_own_field() {
        use strum::IntoEnumIterator;

        let record = WorkRecord {
            number_of_websites: Some(1),
            number_of_designs: Some(2),
            number_of_videos: Some(3),
            ad_platforms: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            ..task("all", "web_developer", jan(1), 1.0)
        };

        let totals: Vec<u32> = Role::iter()
            .map(|role| {
                let tagged = WorkRecord {
                    role: RoleTag::Known(role),
                    ..record.clone()
                };
                summarize([&tagged], None, Some(role))
                    .role_total
                    .map(|total| total.value())
                    .unwrap_or_default()
            })
            .collect();

        assert_eq!(totals, vec![1, 2, 3, 4]);
    }

    #[test]
    fn rerunning_is_deterministic() {
        let records = vec![websites("a", jan(1), 4.5, 1), websites("b", jan(2), 2.25, 1)];
        let first = summarize(&records, None, Some(Role::WebDeveloper));
        let second = summarize(&records, None, Some(Role::WebDeveloper));
        assert_eq!(first, second);
    }
}
