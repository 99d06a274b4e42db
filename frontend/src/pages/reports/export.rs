use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;

use crate::api::{ApiError, AttendanceReportRow, LeaveReportRow, PendingLeaveExportRow};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("There is nothing to export.")]
    Empty,
    #[error("Failed to write {what}: {source}")]
    Xlsx {
        what: String,
        #[source]
        source: XlsxError,
    },
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Api(err) => err,
            other => ApiError::unknown(other.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn date(value: Option<chrono::NaiveDate>) -> Self {
        Cell::Text(
            value
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        )
    }

    fn text(value: Option<&str>) -> Self {
        Cell::Text(value.unwrap_or_default().to_string())
    }
}

/// A row that knows its spreadsheet layout.
pub trait ExportRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<Cell>;
}

impl ExportRow for PendingLeaveExportRow {
    const HEADERS: &'static [&'static str] = &[
        "Employee Code",
        "Employee Name",
        "Leave Type",
        "Applied Date",
        "Start Date",
        "End Date",
        "Duration",
        "Reason",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.employee_code.clone()),
            Cell::text(self.employee_name.as_deref()),
            Cell::Text(self.leave_type.code().to_string()),
            Cell::date(Some(self.applied_date)),
            Cell::date(self.start_date),
            Cell::date(self.end_date),
            Cell::Number(self.duration),
            Cell::text(self.reason.as_deref()),
        ]
    }
}

impl ExportRow for AttendanceReportRow {
    const HEADERS: &'static [&'static str] = &[
        "Employee Code",
        "Employee Name",
        "Date",
        "Check In",
        "Check Out",
        "Status",
    ];

    fn cells(&self) -> Vec<Cell> {
        let time = |t: Option<chrono::NaiveTime>| {
            Cell::Text(t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default())
        };
        vec![
            Cell::Text(self.employee_code.clone()),
            Cell::text(self.employee_name.as_deref()),
            Cell::date(Some(self.date)),
            time(self.check_in),
            time(self.check_out),
            Cell::Text(self.status.clone()),
        ]
    }
}

impl ExportRow for LeaveReportRow {
    const HEADERS: &'static [&'static str] = &[
        "Employee Code",
        "Employee Name",
        "Leave Type",
        "Applied Date",
        "Duration",
        "Status",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.employee_code.clone()),
            Cell::text(self.employee_name.as_deref()),
            Cell::Text(self.leave_type.code().to_string()),
            Cell::date(Some(self.applied_date)),
            Cell::Number(self.duration),
            Cell::Text(self.status.label().to_string()),
        ]
    }
}

fn xlsx_error(what: impl Into<String>) -> impl FnOnce(XlsxError) -> ExportError {
    let what = what.into();
    move |source| ExportError::Xlsx { what, source }
}

/// Header row followed by one row per item, as an `.xlsx` byte buffer.
pub fn build_workbook<R: ExportRow>(sheet_name: &str, rows: &[R]) -> Result<Vec<u8>, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::Empty);
    }
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(xlsx_error("sheet name"))?;

    for (col, header) in R::HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(xlsx_error(format!("header '{}'", header)))?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, cell) in row.cells().into_iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(value) => worksheet.write_string(r, col, &value),
                Cell::Number(value) => worksheet.write_number(r, col, value),
            }
            .map_err(xlsx_error(format!("row {} column {}", r, col)))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(xlsx_error("workbook"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{LeaveStatus, LeaveType};
    use crate::test_support::helpers::date;

    fn pending_row() -> PendingLeaveExportRow {
        PendingLeaveExportRow {
            employee_code: "EMP001".into(),
            employee_name: None,
            leave_type: LeaveType::Medical,
            applied_date: date(2025, 1, 2),
            start_date: Some(date(2025, 1, 6)),
            end_date: Some(date(2025, 1, 7)),
            duration: 2.0,
            reason: Some("flu".into()),
        }
    }

    #[test]
    fn pending_leave_cells_follow_headers() {
        let cells = pending_row().cells();
        assert_eq!(cells.len(), PendingLeaveExportRow::HEADERS.len());
        assert_eq!(cells[0], Cell::Text("EMP001".into()));
        assert_eq!(cells[1], Cell::Text(String::new()));
        assert_eq!(cells[2], Cell::Text("ML".into()));
        assert_eq!(cells[4], Cell::Text("2025-01-06".into()));
        assert_eq!(cells[6], Cell::Number(2.0));
    }

    #[test]
    fn leave_report_cells_use_status_label() {
        let row = LeaveReportRow {
            employee_code: "EMP002".into(),
            employee_name: Some("Sam".into()),
            leave_type: LeaveType::Casual,
            applied_date: date(2025, 2, 1),
            duration: 0.5,
            status: LeaveStatus::Rejected,
        };
        let cells = row.cells();
        assert_eq!(cells.len(), LeaveReportRow::HEADERS.len());
        assert_eq!(cells[5], Cell::Text(LeaveStatus::Rejected.label().into()));
    }

    #[test]
    fn workbook_is_a_zip_archive() {
        let bytes = build_workbook("Pending", &[pending_row(), pending_row()]).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn empty_export_is_refused() {
        let err = build_workbook::<PendingLeaveExportRow>("Pending", &[]).unwrap_err();
        assert!(matches!(err, ExportError::Empty));
        let api: ApiError = err.into();
        assert_eq!(api.error, "There is nothing to export.");
    }

    #[test]
    fn api_failures_pass_through_unchanged() {
        let api: ApiError = ExportError::from(ApiError::business("X")).into();
        assert!(api.is_business());
        assert_eq!(api.error, "X");
    }
}
