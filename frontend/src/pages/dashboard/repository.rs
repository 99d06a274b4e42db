use std::rc::Rc;

use chrono::NaiveDate;

use crate::api::{
    ApiClient, ApiError, AttendanceChartPoint, DashboardCounts, EmployeeActivity, LeaveChartPoint,
};

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn counts(&self) -> Result<DashboardCounts, ApiError> {
        self.client.dashboard_counts().await
    }

    pub async fn leave_chart(&self, year: i32) -> Result<Vec<LeaveChartPoint>, ApiError> {
        self.client.dashboard_leave_chart(year).await
    }

    pub async fn attendance_chart(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<AttendanceChartPoint>, ApiError> {
        self.client.dashboard_attendance_chart(from, to).await
    }

    pub async fn employee_activity(&self, code: &str) -> Result<Vec<EmployeeActivity>, ApiError> {
        self.client.employee_activity(code).await
    }
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}
