use reqwest::multipart::{Form, Part};
use serde_json::json;

use super::{
    client::ApiClient,
    types::{
        ApiError, LeaveApplication, LeaveDetail, LeaveDetailRequest, LeavePrintData,
        LeaveStatus, LeaveType, PendingLeaveExportRow, SubmitApprovalRequest, TempApproveRequest,
    },
};

pub(crate) fn detail_path(leave_type: LeaveType) -> &'static str {
    match leave_type {
        LeaveType::Parental => "LeaveApproval/leavedetails/parental",
        LeaveType::Casual | LeaveType::Medical => "LeaveApproval/leave/detail",
    }
}

fn submit_form(request: SubmitApprovalRequest) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("employeeId", request.employee_id.to_string())
        .text("id", request.id.to_string())
        .text("type", request.leave_type.code())
        .text("reason", request.reason);
    if let Some(document) = request.document {
        let part = Part::bytes(document.bytes)
            .file_name(document.file_name)
            .mime_str(&document.mime_type)
            .map_err(|e| ApiError::validation(format!("Invalid document type: {}", e)))?;
        form = form.part("file", part);
    }
    Ok(form)
}

impl ApiClient {
    pub async fn list_leaves(&self, status: LeaveStatus) -> Result<Vec<LeaveApplication>, ApiError> {
        let path = format!("LeaveApproval/leaveList/{}", status.as_str());
        self.post_json(&path, &json!({})).await?.into_data()
    }

    pub async fn get_leave_detail(
        &self,
        leave_type: LeaveType,
        request: &LeaveDetailRequest,
    ) -> Result<LeaveDetail, ApiError> {
        self.post_json(detail_path(leave_type), request)
            .await?
            .into_data()
    }

    pub async fn temp_approve(
        &self,
        request: &TempApproveRequest,
    ) -> Result<Option<String>, ApiError> {
        self.post_json("LeaveApproval/tempApprove", request)
            .await?
            .into_message()
    }

    pub async fn submit_approve(
        &self,
        request: SubmitApprovalRequest,
    ) -> Result<Option<String>, ApiError> {
        let form = submit_form(request)?;
        self.post_multipart("LeaveApproval/submitApprove", form)
            .await?
            .into_message()
    }

    pub async fn pending_leave_export(&self) -> Result<Vec<PendingLeaveExportRow>, ApiError> {
        self.post_json("LeaveApproval/pendingLeaveExport", &json!({}))
            .await?
            .into_data()
    }

    pub async fn leave_print_data(&self, id: i64) -> Result<LeavePrintData, ApiError> {
        self.post_json("LeaveApproval/pdfData", &json!({ "id": id }))
            .await?
            .into_data()
    }
}
