use leptos::*;

use crate::api::{ApiError, LeaveApplication, LeavePrintData, LeaveStatus, SelectedDocument};
use crate::components::data_table::{matches_filter, page_count, page_slice, PAGE_SIZE};

pub const PDF_MIME: &str = "application/pdf";

/// Newest / oldest selector. Remembered, not applied to the rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "oldest" => SortOrder::Oldest,
            _ => SortOrder::Newest,
        }
    }
}

/// Tab, code filter, page and sort selection of the leave list.
#[derive(Clone, Copy)]
pub struct LeaveListState {
    tab: RwSignal<LeaveStatus>,
    code_filter: RwSignal<String>,
    page: RwSignal<usize>,
    sort: RwSignal<SortOrder>,
}

impl Default for LeaveListState {
    fn default() -> Self {
        Self {
            tab: create_rw_signal(LeaveStatus::Pending),
            code_filter: create_rw_signal(String::new()),
            page: create_rw_signal(1),
            sort: create_rw_signal(SortOrder::default()),
        }
    }
}

impl LeaveListState {
    pub fn tab(&self) -> RwSignal<LeaveStatus> {
        self.tab
    }

    pub fn code_filter(&self) -> RwSignal<String> {
        self.code_filter
    }

    pub fn page(&self) -> RwSignal<usize> {
        self.page
    }

    pub fn sort(&self) -> RwSignal<SortOrder> {
        self.sort
    }

    pub fn set_tab(&self, tab: LeaveStatus) {
        self.tab.set(tab);
        self.page.set(1);
    }

    pub fn set_code_filter(&self, value: String) {
        self.code_filter.set(value);
        self.page.set(1);
    }
}

pub fn filter_by_code(leaves: &[LeaveApplication], needle: &str) -> Vec<LeaveApplication> {
    leaves
        .iter()
        .filter(|leave| matches_filter(&[leave.employee_code.as_str()], needle))
        .cloned()
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageView {
    pub rows: Vec<LeaveApplication>,
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

/// Filters by employee code and cuts the requested page (clamped to the last one).
pub fn visible_page(leaves: &[LeaveApplication], needle: &str, page: usize) -> PageView {
    let filtered = filter_by_code(leaves, needle);
    let pages = page_count(filtered.len(), PAGE_SIZE);
    let page = page.clamp(1, pages.max(1));
    PageView {
        rows: page_slice(&filtered, page, PAGE_SIZE),
        page,
        page_count: pages,
        total: filtered.len(),
    }
}

/// Accepts only PDF documents.
pub fn validate_document(document: SelectedDocument) -> Result<SelectedDocument, ApiError> {
    if document.mime_type.eq_ignore_ascii_case(PDF_MIME) {
        Ok(document)
    } else {
        Err(ApiError::validation("Only PDF documents can be uploaded."))
    }
}

pub fn validate_reason(reason: &str) -> Result<String, ApiError> {
    let reason = reason.trim();
    if reason.is_empty() {
        Err(ApiError::validation("Please enter a reason for rejection."))
    } else {
        Ok(reason.to_string())
    }
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Self-contained printable document for one application.
pub fn render_print_html(data: &LeavePrintData) -> String {
    let name = data.employee_name.as_deref().unwrap_or("-");
    let rows: String = data
        .leave_history
        .iter()
        .map(|entry| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{:?}</td></tr>",
                escape_html(&entry.period_label()),
                entry.leave_type.code(),
                entry.approval
            )
        })
        .collect();
    format!(
        concat!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Leave {code}</title>",
            "<style>body{{font-family:sans-serif;padding:24px}}table{{border-collapse:collapse;width:100%}}",
            "td,th{{border:1px solid #999;padding:4px 8px;text-align:left}}</style></head><body>",
            "<h1>Leave Application</h1>",
            "<p><strong>Employee:</strong> {code} {name}</p>",
            "<p><strong>Department:</strong> {department}</p>",
            "<p><strong>Type:</strong> {leave_type}</p>",
            "<p><strong>Applied:</strong> {applied}</p>",
            "<p><strong>Duration:</strong> {duration} day(s)</p>",
            "<p><strong>Status:</strong> {status}</p>",
            "<p><strong>Reason:</strong> {reason}</p>",
            "<table><thead><tr><th>Date</th><th>Type</th><th>Decision</th></tr></thead><tbody>{rows}</tbody></table>",
            "</body></html>"
        ),
        code = escape_html(&data.employee_code),
        name = escape_html(name),
        department = escape_html(data.department.as_deref().unwrap_or("-")),
        leave_type = data.leave_type.label(),
        applied = data.applied_date.format("%Y-%m-%d"),
        duration = data.duration,
        status = data.status.label(),
        reason = escape_html(data.reason.as_deref().unwrap_or("-")),
        rows = rows,
    )
}
