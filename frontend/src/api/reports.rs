use super::{
    client::ApiClient,
    types::{
        ApiError, AttendanceReportQuery, AttendanceReportRow, LeaveReportQuery, LeaveReportRow,
    },
};

impl ApiClient {
    pub async fn attendance_report(
        &self,
        query: &AttendanceReportQuery,
    ) -> Result<Vec<AttendanceReportRow>, ApiError> {
        self.post_json("Report/attendance", query)
            .await?
            .into_data()
    }

    pub async fn leave_report(
        &self,
        query: &LeaveReportQuery,
    ) -> Result<Vec<LeaveReportRow>, ApiError> {
        self.post_json("Report/leave", query).await?.into_data()
    }
}
