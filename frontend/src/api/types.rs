use chrono::{NaiveDate, NaiveTime};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LeaveType {
    #[serde(rename = "CL")]
    Casual,
    #[serde(rename = "ML")]
    Medical,
    #[serde(rename = "PL")]
    Parental,
}

impl LeaveType {
    pub const ALL: [LeaveType; 3] = [LeaveType::Casual, LeaveType::Medical, LeaveType::Parental];

    pub fn code(&self) -> &'static str {
        match self {
            LeaveType::Casual => "CL",
            LeaveType::Medical => "ML",
            LeaveType::Parental => "PL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Casual => "Casual Leave",
            LeaveType::Medical => "Medical Leave",
            LeaveType::Parental => "Parental Leave",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "CL" => Some(LeaveType::Casual),
            "ML" => Some(LeaveType::Medical),
            "PL" => Some(LeaveType::Parental),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub const ALL: [LeaveStatus; 3] = [
        LeaveStatus::Pending,
        LeaveStatus::Approved,
        LeaveStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }

    /// Only pending applications accept decisions.
    pub fn allows_decisions(&self) -> bool {
        matches!(self, LeaveStatus::Pending)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplication {
    pub id: i64,
    pub employee_id: i64,
    pub employee_code: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub leave_type: LeaveType,
    pub applied_date: NaiveDate,
    pub duration: f64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub document: Option<String>,
    pub status: LeaveStatus,
}

impl LeaveApplication {
    pub fn period_label(&self) -> String {
        format_period(self.date, self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryApproval {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveHistoryEntry {
    pub application_id: i64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub leave_type: LeaveType,
    #[serde(default)]
    pub approval: EntryApproval,
}

impl LeaveHistoryEntry {
    pub fn period_label(&self) -> String {
        format_period(self.date, self.start_date, self.end_date)
    }
}

fn format_period(
    date: Option<NaiveDate>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> String {
    match (date, start, end) {
        (Some(day), _, _) => day.format("%Y-%m-%d").to_string(),
        (None, Some(start), Some(end)) if start != end => format!(
            "{} to {}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        ),
        (None, Some(start), _) => start.format("%Y-%m-%d").to_string(),
        _ => "-".to_string(),
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct BalanceCount {
    #[serde(default)]
    pub remaining: f64,
    #[serde(default)]
    pub assigned: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EmployeeLeaveBalance {
    #[serde(default)]
    pub casual: BalanceCount,
    #[serde(default)]
    pub medical: BalanceCount,
    #[serde(default)]
    pub parental: BalanceCount,
    #[serde(default)]
    pub unpaid: BalanceCount,
    #[serde(default)]
    pub restricted: BalanceCount,
    #[serde(default)]
    pub maternity: BalanceCount,
}

impl EmployeeLeaveBalance {
    pub fn categories(&self) -> [(&'static str, BalanceCount); 6] {
        [
            ("Casual", self.casual),
            ("Medical", self.medical),
            ("Parental", self.parental),
            ("Unpaid", self.unpaid),
            ("Restricted", self.restricted),
            ("Maternity", self.maternity),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDetail {
    #[serde(default)]
    pub balance: EmployeeLeaveBalance,
    pub detail: LeaveApplication,
    #[serde(default)]
    pub leave_history: Vec<LeaveHistoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDetailRequest {
    pub id: i64,
    pub employee_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TempApproveRequest {
    pub id: i64,
    #[serde(rename = "Tapprove")]
    pub tapprove: u8,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDocument {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitApprovalRequest {
    pub employee_id: i64,
    pub id: i64,
    pub leave_type: LeaveType,
    pub reason: String,
    pub document: Option<SelectedDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PendingLeaveExportRow {
    pub employee_code: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub leave_type: LeaveType,
    pub applied_date: NaiveDate,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub duration: f64,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeavePrintData {
    pub employee_code: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    pub leave_type: LeaveType,
    pub applied_date: NaiveDate,
    pub duration: f64,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: LeaveStatus,
    #[serde(default)]
    pub leave_history: Vec<LeaveHistoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    #[serde(default)]
    pub total_employees: u32,
    #[serde(default)]
    pub present_today: u32,
    #[serde(default)]
    pub on_leave_today: u32,
    #[serde(default)]
    pub pending_leaves: u32,
    #[serde(default)]
    pub late_today: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveChartPoint {
    pub month: u32,
    #[serde(default)]
    pub casual: u32,
    #[serde(default)]
    pub medical: u32,
    #[serde(default)]
    pub parental: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceChartPoint {
    pub date: NaiveDate,
    #[serde(default)]
    pub present: u32,
    #[serde(default)]
    pub absent: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeActivity {
    pub date: NaiveDate,
    pub activity: String,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub employee_code: String,
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReportQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReportRow {
    pub employee_code: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub check_in: Option<NaiveTime>,
    #[serde(default)]
    pub check_out: Option<NaiveTime>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveReportQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeaveStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveReportRow {
    pub employee_code: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub leave_type: LeaveType,
    pub applied_date: NaiveDate,
    pub duration: f64,
    pub status: LeaveStatus,
}

/// Attendance windows, all values `HH:MM`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimeAllocation {
    pub check_in_start: String,
    pub check_in_end: String,
    pub check_out_start: String,
    pub check_out_end: String,
    pub late_after: String,
    pub half_day_after: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: code.into(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn business(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "BUSINESS_ERROR")
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self::with_code(msg, format!("HTTP_{}", status))
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR"
    }

    pub fn is_business(&self) -> bool {
        self.code == "BUSINESS_ERROR"
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn serialize_temp_approve_uses_wire_names() {
        let req = TempApproveRequest {
            id: 7,
            tapprove: 1,
            leave_type: LeaveType::Casual,
            reason: None,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["Tapprove"], serde_json::json!(1));
        assert_eq!(v["type"], serde_json::json!("CL"));
        assert!(v.get("reason").is_none());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert!(validation.is_validation());
        assert!(validation.details.is_none());

        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");
        assert!(ApiError::business("x").is_business());
        assert_eq!(ApiError::http(502, "bad gateway").code, "HTTP_502");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::business("Leave already finalised");
        assert_eq!(format!("{}", error), "Leave already finalised");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn temp_approve_request_serializes_reason_only_when_present() {
        let reject = TempApproveRequest {
            id: 2,
            tapprove: 0,
            leave_type: LeaveType::Parental,
            reason: Some("overlaps audit".into()),
        };
        let value = serde_json::to_value(&reject).unwrap();
        assert_eq!(value["Tapprove"], json!(0));
        assert_eq!(value["type"], json!("PL"));
        assert_eq!(value["reason"], json!("overlaps audit"));

        let approve = TempApproveRequest {
            reason: None,
            tapprove: 1,
            ..reject
        };
        let value = serde_json::to_value(&approve).unwrap();
        assert!(value.get("reason").is_none());
    }

    #[test]
    fn deserialize_leave_detail_with_defaults() {
        let detail: LeaveDetail = serde_json::from_value(json!({
            "detail": {
                "id": 10,
                "employeeId": 3,
                "employeeCode": "EMP003",
                "leaveType": "ML",
                "appliedDate": "2025-03-01",
                "duration": 2.0,
                "startDate": "2025-03-04",
                "endDate": "2025-03-05",
                "status": "pending"
            },
            "leaveHistory": [
                { "applicationId": 1, "date": "2025-03-04", "leaveType": "ML" },
                { "applicationId": 2, "date": "2025-03-05", "leaveType": "ML", "approval": "approved" }
            ]
        }))
        .unwrap();
        assert_eq!(detail.detail.leave_type, LeaveType::Medical);
        assert_eq!(detail.detail.period_label(), "2025-03-04 to 2025-03-05");
        assert_eq!(detail.leave_history.len(), 2);
        assert_eq!(detail.leave_history[0].approval, EntryApproval::Pending);
        assert_eq!(detail.leave_history[1].approval, EntryApproval::Approved);
        assert_eq!(detail.balance, EmployeeLeaveBalance::default());
    }

    #[test]
    fn leave_type_codes_round_trip_through_lookup() {
        for leave_type in LeaveType::ALL {
            assert_eq!(LeaveType::from_code(leave_type.code()), Some(leave_type));
        }
        assert_eq!(LeaveType::from_code(" pl "), Some(LeaveType::Parental));
        assert_eq!(LeaveType::from_code("AL"), None);
    }

    #[test]
    fn only_pending_status_allows_decisions() {
        assert!(LeaveStatus::Pending.allows_decisions());
        assert!(!LeaveStatus::Approved.allows_decisions());
        assert!(!LeaveStatus::Rejected.allows_decisions());
    }

    #[test]
    fn history_entry_period_label_prefers_single_date() {
        let entry = LeaveHistoryEntry {
            application_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 1, 2),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 3),
            leave_type: LeaveType::Casual,
            approval: EntryApproval::Pending,
        };
        assert_eq!(entry.period_label(), "2025-01-02");

        let open = LeaveHistoryEntry {
            date: None,
            start_date: None,
            end_date: None,
            ..entry
        };
        assert_eq!(open.period_label(), "-");
    }
}
