use chrono::NaiveDate;
use serde_json::json;

use super::{
    client::ApiClient,
    types::{
        ApiError, AttendanceChartPoint, DashboardCounts, EmployeeActivity, LeaveChartPoint,
    },
};

impl ApiClient {
    pub async fn dashboard_counts(&self) -> Result<DashboardCounts, ApiError> {
        self.post_json("Dashboard/counts", &json!({}))
            .await?
            .into_data()
    }

    pub async fn dashboard_leave_chart(&self, year: i32) -> Result<Vec<LeaveChartPoint>, ApiError> {
        self.post_json("Dashboard/leaveChart", &json!({ "year": year }))
            .await?
            .into_data()
    }

    pub async fn dashboard_attendance_chart(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<AttendanceChartPoint>, ApiError> {
        self.post_json(
            "Dashboard/attendanceChart",
            &json!({
                "from": from.format("%Y-%m-%d").to_string(),
                "to": to.format("%Y-%m-%d").to_string(),
            }),
        )
        .await?
        .into_data()
    }

    pub async fn employee_activity(
        &self,
        employee_code: &str,
    ) -> Result<Vec<EmployeeActivity>, ApiError> {
        self.post_json(
            "Dashboard/employeeActivity",
            &json!({ "employeeCode": employee_code }),
        )
        .await?
        .into_data()
    }
}
