use leptos::*;

use crate::components::{
    common::{Button, ButtonVariant},
    error::InlineErrorMessage,
    layout::{Layout, LoadingSpinner},
};
use crate::pages::reports::{
    components::{
        form::ReportForm,
        tables::{AttendanceReportTable, LeaveReportTable},
    },
    utils::ReportKind,
    view_model::ReportsViewModel,
};

#[component]
pub fn ReportsPage() -> impl IntoView {
    let vm = ReportsViewModel::new();
    let kind = vm.kind;
    let loading = vm.loading();
    let attendance = vm.attendance_action.value();
    let leave = vm.leave_action.value();
    let attendance_rows =
        Signal::derive(move || attendance.get().and_then(Result::ok).unwrap_or_default());
    let leave_rows = Signal::derive(move || leave.get().and_then(Result::ok).unwrap_or_default());

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
                    <h1 class="text-2xl font-bold text-fg">"Reports"</h1>
                    <Button
                        variant=ButtonVariant::Success
                        loading=vm.exporting
                        on_click=Callback::new(move |_| vm.export_pending_leaves())
                    >
                        "Export pending leaves"
                    </Button>
                </div>
                <ReportForm vm=vm/>
                <InlineErrorMessage error=vm.result_error()/>
                <Show when=move || loading.get()>
                    <LoadingSpinner/>
                </Show>
                <Show
                    when=move || kind.get() == ReportKind::Attendance
                    fallback=move || view! { <LeaveReportTable rows=leave_rows/> }
                >
                    <AttendanceReportTable rows=attendance_rows/>
                </Show>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn reports_page_renders_form_and_export() {
        let html = render_to_string(move || view! { <ReportsPage/> });
        assert!(html.contains("Reports"));
        assert!(html.contains("Run report"));
        assert!(html.contains("Export pending leaves"));
        assert!(html.contains("Employee code"));
        assert!(html.contains("No attendance rows"));
    }
}
