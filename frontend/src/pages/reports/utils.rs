use chrono::NaiveDate;

use crate::api::{ApiError, AttendanceReportQuery, LeaveReportQuery, LeaveStatus};
use crate::components::forms::parse_date_range;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReportKind {
    #[default]
    Attendance,
    Leave,
}

impl ReportKind {
    pub const ALL: [ReportKind; 2] = [ReportKind::Attendance, ReportKind::Leave];

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Attendance => "Attendance",
            ReportKind::Leave => "Leave",
        }
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn attendance_query(
    from: &str,
    to: &str,
    employee_code: &str,
) -> Result<AttendanceReportQuery, ApiError> {
    let (from, to) = parse_date_range(from, to)?;
    Ok(AttendanceReportQuery {
        from,
        to,
        employee_code: non_blank(employee_code),
    })
}

/// An empty status value means every status.
pub fn leave_query(from: &str, to: &str, status: &str) -> Result<LeaveReportQuery, ApiError> {
    let (from, to) = parse_date_range(from, to)?;
    let status = LeaveStatus::ALL
        .into_iter()
        .find(|candidate| candidate.as_str() == status);
    Ok(LeaveReportQuery { from, to, status })
}

pub fn export_file_name(prefix: &str, from: NaiveDate, to: NaiveDate) -> String {
    format!("{}_{}_{}.xlsx", prefix, from.format("%Y%m%d"), to.format("%Y%m%d"))
}
