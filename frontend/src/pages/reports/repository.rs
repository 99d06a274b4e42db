use std::rc::Rc;

use crate::api::{
    ApiClient, ApiError, AttendanceReportQuery, AttendanceReportRow, LeaveReportQuery,
    LeaveReportRow, PendingLeaveExportRow,
};

#[derive(Clone)]
pub struct ReportsRepository {
    client: Rc<ApiClient>,
}

impl ReportsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn attendance(
        &self,
        query: AttendanceReportQuery,
    ) -> Result<Vec<AttendanceReportRow>, ApiError> {
        self.client.attendance_report(&query).await
    }

    pub async fn leave(&self, query: LeaveReportQuery) -> Result<Vec<LeaveReportRow>, ApiError> {
        self.client.leave_report(&query).await
    }

    pub async fn pending_leave_export(&self) -> Result<Vec<PendingLeaveExportRow>, ApiError> {
        self.client.pending_leave_export().await
    }
}
