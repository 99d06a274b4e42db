use std::rc::Rc;

use leptos::*;

use crate::api::{
    ApiClient, ApiError, AttendanceReportQuery, AttendanceReportRow, LeaveReportQuery,
    LeaveReportRow,
};
use crate::pages::reports::{
    export::{build_workbook, ExportError, ExportRow},
    repository::ReportsRepository,
    utils::{attendance_query, export_file_name, leave_query, ReportKind},
};
use crate::state::toast::{use_toasts, Toasts};
use crate::utils::{download, time};

#[derive(Clone, Copy)]
pub struct ReportsViewModel {
    pub kind: RwSignal<ReportKind>,
    pub from: RwSignal<String>,
    pub to: RwSignal<String>,
    pub employee_code: RwSignal<String>,
    pub status: RwSignal<String>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub attendance_action: Action<AttendanceReportQuery, Result<Vec<AttendanceReportRow>, ApiError>>,
    pub leave_action: Action<LeaveReportQuery, Result<Vec<LeaveReportRow>, ApiError>>,
    pub exporting: RwSignal<bool>,
    repository: StoredValue<ReportsRepository>,
    toasts: Toasts,
}

fn save_workbook<R: ExportRow>(sheet: &str, file_name: &str, rows: &[R]) -> Result<(), ExportError> {
    let bytes = build_workbook(sheet, rows)?;
    download::download_bytes(file_name, download::XLSX_MIME, &bytes)?;
    Ok(())
}

impl ReportsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(ReportsRepository::new_with_client(Rc::new(api)));
        let toasts = use_toasts();
        let today = time::today();

        let attendance_action = create_action(move |query: &AttendanceReportQuery| {
            let repo = repository.get_value();
            let query = query.clone();
            async move { repo.attendance(query).await }
        });
        let leave_action = create_action(move |query: &LeaveReportQuery| {
            let repo = repository.get_value();
            let query = query.clone();
            async move { repo.leave(query).await }
        });

        Self {
            kind: create_rw_signal(ReportKind::default()),
            from: create_rw_signal(time::month_start(today).format("%Y-%m-%d").to_string()),
            to: create_rw_signal(today.format("%Y-%m-%d").to_string()),
            employee_code: create_rw_signal(String::new()),
            status: create_rw_signal(String::new()),
            form_error: create_rw_signal(None),
            attendance_action,
            leave_action,
            exporting: create_rw_signal(false),
            repository,
            toasts,
        }
    }

    pub fn loading(&self) -> Signal<bool> {
        let attendance = self.attendance_action.pending();
        let leave = self.leave_action.pending();
        Signal::derive(move || attendance.get() || leave.get())
    }

    pub fn result_error(&self) -> Signal<Option<ApiError>> {
        let kind = self.kind;
        let attendance = self.attendance_action.value();
        let leave = self.leave_action.value();
        Signal::derive(move || match kind.get() {
            ReportKind::Attendance => attendance.get().and_then(Result::err),
            ReportKind::Leave => leave.get().and_then(Result::err),
        })
    }

    /// Validates the form and runs the selected report; nothing is sent when invalid.
    pub fn run(&self) {
        let from = self.from.get_untracked();
        let to = self.to.get_untracked();
        let result = match self.kind.get_untracked() {
            ReportKind::Attendance => {
                attendance_query(&from, &to, &self.employee_code.get_untracked())
                    .map(|query| self.attendance_action.dispatch(query))
            }
            ReportKind::Leave => leave_query(&from, &to, &self.status.get_untracked())
                .map(|query| self.leave_action.dispatch(query)),
        };
        self.form_error.set(result.err());
    }

    pub fn export_current(&self) {
        let outcome = match self.kind.get_untracked() {
            ReportKind::Attendance => {
                let query = self.attendance_action.input().get_untracked();
                let rows = self
                    .attendance_action
                    .value()
                    .get_untracked()
                    .and_then(Result::ok)
                    .unwrap_or_default();
                let name = self.last_range_name("attendance", query.map(|q| (q.from, q.to)));
                save_workbook("Attendance", &name, &rows)
            }
            ReportKind::Leave => {
                let query = self.leave_action.input().get_untracked();
                let rows = self
                    .leave_action
                    .value()
                    .get_untracked()
                    .and_then(Result::ok)
                    .unwrap_or_default();
                let name = self.last_range_name("leave", query.map(|q| (q.from, q.to)));
                save_workbook("Leave", &name, &rows)
            }
        };
        self.report_export(outcome);
    }

    fn last_range_name(
        &self,
        prefix: &str,
        range: Option<(chrono::NaiveDate, chrono::NaiveDate)>,
    ) -> String {
        let today = time::today();
        let (from, to) = range.unwrap_or((today, today));
        export_file_name(prefix, from, to)
    }

    /// Downloads every pending leave as a workbook.
    pub fn export_pending_leaves(&self) {
        if self.exporting.get_untracked() {
            return;
        }
        self.exporting.set(true);
        let this = *self;
        let repo = self.repository.get_value();
        spawn_local(async move {
            let outcome = match repo.pending_leave_export().await {
                Ok(rows) => {
                    let today = time::today();
                    save_workbook(
                        "Pending leaves",
                        &export_file_name("pending_leaves", today, today),
                        &rows,
                    )
                }
                Err(err) => Err(ExportError::from(err)),
            };
            this.exporting.set(false);
            this.report_export(outcome);
        });
    }

    fn report_export(&self, outcome: Result<(), ExportError>) {
        match outcome {
            Ok(()) => {
                self.toasts.success("Export downloaded.");
            }
            Err(ExportError::Empty) => {
                self.toasts.info(ExportError::Empty.to_string());
            }
            Err(err) => {
                log::error!("export failed: {}", err);
                self.toasts.api_error(&ApiError::from(err));
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::toast::ToastLevel;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn invalid_range_is_reported_without_a_request() {
        with_runtime(|| {
            let vm = ReportsViewModel::new();
            vm.from.set("2025-05-02".into());
            vm.to.set("2025-05-01".into());

            vm.run();

            assert!(vm.form_error.get().is_some_and(|e| e.is_validation()));
            assert!(vm.attendance_action.input().get().is_none());
            assert_eq!(vm.attendance_action.version().get(), 0);
        });
    }

    #[test]
    fn exporting_before_running_a_report_only_informs() {
        with_runtime(|| {
            let vm = ReportsViewModel::new();
            vm.kind.set(ReportKind::Leave);

            vm.export_current();

            let toasts = use_toasts().items().get();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].level, ToastLevel::Info);
            assert_eq!(toasts[0].message, "There is nothing to export.");
        });
    }
}
