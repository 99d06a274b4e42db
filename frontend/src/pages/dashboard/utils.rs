use chrono::NaiveDate;

use crate::api::{ApiError, AttendanceChartPoint, LeaveChartPoint};
use crate::components::charts::{ChartRow, ChartSeries};
use crate::utils::time::month_start;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Number of past years offered next to the current one in the chart selector.
pub const YEAR_HISTORY: i32 = 4;

pub const LEAVE_SERIES: &[ChartSeries] = &[
    ChartSeries { name: "Casual", color_class: "bg-blue-500" },
    ChartSeries { name: "Medical", color_class: "bg-amber-500" },
    ChartSeries { name: "Parental", color_class: "bg-purple-500" },
];

pub const ATTENDANCE_SERIES: &[ChartSeries] = &[
    ChartSeries { name: "Present", color_class: "bg-green-500" },
    ChartSeries { name: "Absent", color_class: "bg-red-500" },
];

pub fn month_label(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTHS.get(index as usize))
        .copied()
        .unwrap_or("?")
}

pub fn leave_chart_rows(points: &[LeaveChartPoint]) -> Vec<ChartRow> {
    let mut points = points.to_vec();
    points.sort_by_key(|point| point.month);
    points
        .into_iter()
        .map(|point| ChartRow {
            label: month_label(point.month).to_string(),
            values: vec![
                point.casual as f64,
                point.medical as f64,
                point.parental as f64,
            ],
        })
        .collect()
}

pub fn attendance_chart_rows(points: &[AttendanceChartPoint]) -> Vec<ChartRow> {
    let mut points = points.to_vec();
    points.sort_by_key(|point| point.date);
    points
        .into_iter()
        .map(|point| ChartRow {
            label: point.date.format("%m-%d").to_string(),
            values: vec![point.present as f64, point.absent as f64],
        })
        .collect()
}

pub fn year_options(current: i32) -> Vec<i32> {
    (current - YEAR_HISTORY..=current).rev().collect()
}

/// Month-to-date window shown before the user picks a range.
pub fn default_attendance_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (month_start(today), today)
}

pub fn validate_employee_code(raw: &str) -> Result<String, ApiError> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(ApiError::validation("Enter an employee code to look up."));
    }
    Ok(code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::date;

    #[test]
    fn leave_rows_follow_calendar_order() {
        let rows = leave_chart_rows(&[
            LeaveChartPoint { month: 3, casual: 2, medical: 0, parental: 1 },
            LeaveChartPoint { month: 1, casual: 5, medical: 1, parental: 0 },
        ]);
        assert_eq!(rows[0].label, "Jan");
        assert_eq!(rows[0].values, vec![5.0, 1.0, 0.0]);
        assert_eq!(rows[1].label, "Mar");
        assert_eq!(rows[1].values.len(), LEAVE_SERIES.len());
    }

    #[test]
    fn unknown_month_gets_placeholder() {
        assert_eq!(month_label(0), "?");
        assert_eq!(month_label(13), "?");
        assert_eq!(month_label(12), "Dec");
    }

    #[test]
    fn attendance_rows_label_by_day() {
        let rows = attendance_chart_rows(&[AttendanceChartPoint {
            date: date(2025, 2, 3),
            present: 40,
            absent: 2,
        }]);
        assert_eq!(rows[0].label, "02-03");
        assert_eq!(rows[0].values, vec![40.0, 2.0]);
    }

    #[test]
    fn blank_employee_code_is_rejected() {
        let err = validate_employee_code("   ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(validate_employee_code(" EMP007 ").unwrap(), "EMP007");
    }

    #[test]
    fn default_range_is_month_to_date() {
        assert_eq!(
            default_attendance_range(date(2025, 4, 18)),
            (date(2025, 4, 1), date(2025, 4, 18))
        );
        assert_eq!(year_options(2025), vec![2025, 2024, 2023, 2022, 2021]);
    }
}
