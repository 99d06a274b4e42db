use std::{collections::HashMap, rc::Rc};

use leptos::*;

use crate::api::{
    ApiClient, ApiError, LeaveApplication, LeaveDetail, LeaveHistoryEntry, LeaveStatus,
    SelectedDocument, SubmitApprovalRequest,
};
use crate::state::{
    query::{keys, use_query, use_query_cache, QueryCache, QueryResource},
    toast::{use_toasts, Toasts},
};
use crate::utils::download;

use super::{
    decisions::{DecisionOutcome, DecisionTracker},
    repository::{DecisionTarget, LeavesRepository},
    utils::{render_print_html, validate_document, validate_reason, visible_page, LeaveListState, PageView},
};

fn repository_from_context() -> LeavesRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    LeavesRepository::new_with_client(Rc::new(api))
}

#[derive(Clone, Copy)]
pub struct LeavesViewModel {
    pub list_state: LeaveListState,
    pub list_resource: QueryResource<Vec<LeaveApplication>>,
    pub selected: RwSignal<Option<LeaveApplication>>,
}

impl LeavesViewModel {
    pub fn new() -> Self {
        let repository = store_value(repository_from_context());
        let list_state = LeaveListState::default();
        let tab = list_state.tab();

        let list_resource = use_query(
            move || keys::leave_list(tab.get()),
            move |_| {
                let repo = repository.get_value();
                let status = tab.get_untracked();
                async move { repo.list(status).await }
            },
        );

        Self {
            list_state,
            list_resource,
            selected: create_rw_signal(None),
        }
    }

    pub fn page_view(&self) -> Signal<PageView> {
        let list_resource = self.list_resource;
        let list_state = self.list_state;
        Signal::derive(move || {
            let leaves = list_resource
                .get()
                .and_then(Result::ok)
                .unwrap_or_default();
            visible_page(
                &leaves,
                &list_state.code_filter().get(),
                list_state.page().get(),
            )
        })
    }

    pub fn list_error(&self) -> Signal<Option<ApiError>> {
        let list_resource = self.list_resource;
        Signal::derive(move || list_resource.get().and_then(Result::err))
    }

    pub fn open_detail(&self, application: LeaveApplication) {
        // reopening always starts from a fresh decision map
        self.selected.set(None);
        self.selected.set(Some(application));
    }

    pub fn close_detail(&self) {
        self.selected.set(None);
    }
}

/// Target of the reject-reason dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectTarget {
    Entry(DecisionTarget),
    Remaining,
}

#[derive(Clone, Copy)]
pub struct LeaveDetailViewModel {
    pub application: StoredValue<LeaveApplication>,
    pub read_only: bool,
    pub detail_resource: QueryResource<LeaveDetail>,
    pub decisions: RwSignal<DecisionTracker>,
    pub reject_target: RwSignal<Option<RejectTarget>>,
    pub leave_reason: RwSignal<String>,
    pub selected_document: RwSignal<Option<SelectedDocument>>,
    pub bulk_running: RwSignal<bool>,
    pub submit_action: Action<SubmitApprovalRequest, Result<Option<String>, ApiError>>,
    repository: StoredValue<LeavesRepository>,
    toasts: Toasts,
    cache: QueryCache,
}

pub fn decision_targets(
    history: &[LeaveHistoryEntry],
    entry_ids: &[i64],
) -> Vec<DecisionTarget> {
    let types: HashMap<i64, _> = history
        .iter()
        .map(|entry| (entry.application_id, entry.leave_type))
        .collect();
    entry_ids
        .iter()
        .filter_map(|id| {
            types.get(id).map(|leave_type| DecisionTarget {
                entry_id: *id,
                leave_type: *leave_type,
            })
        })
        .collect()
}

impl LeaveDetailViewModel {
    pub fn new(application: LeaveApplication, on_close: Callback<()>) -> Self {
        let repository = store_value(repository_from_context());
        let toasts = use_toasts();
        let cache = use_query_cache();
        let read_only = !application.status.allows_decisions();
        let application_id = application.id;
        let application = store_value(application);

        let detail_resource = use_query(
            move || keys::leave_detail(application_id),
            move |_| {
                let repo = repository.get_value();
                let application = application.get_value();
                async move { repo.detail(&application).await }
            },
        );

        let decisions = create_rw_signal(DecisionTracker::default());
        create_effect(move |_| {
            if let Some(Ok(detail)) = detail_resource.get() {
                decisions.update(|tracker| {
                    tracker.sync_entries(detail.leave_history.iter().map(|e| e.application_id))
                });
            }
        });

        let submit_action = create_action(move |request: &SubmitApprovalRequest| {
            let repo = repository.get_value();
            let request = request.clone();
            async move {
                let result = repo.submit(request).await;
                match &result {
                    Ok(message) => {
                        cache.invalidate(&keys::leave_list(LeaveStatus::Pending));
                        toasts.success(
                            message
                                .clone()
                                .unwrap_or_else(|| "Leave decision submitted.".into()),
                        );
                        on_close.call(());
                    }
                    Err(err) => {
                        log::warn!("submitting leave decision failed: {}", err);
                        toasts.api_error(err);
                    }
                }
                result
            }
        });

        Self {
            application,
            read_only,
            detail_resource,
            decisions,
            reject_target: create_rw_signal(None),
            leave_reason: create_rw_signal(String::new()),
            selected_document: create_rw_signal(None),
            bulk_running: create_rw_signal(false),
            submit_action,
            repository,
            toasts,
            cache,
        }
    }

    /// History of the loaded detail, with the tracker brought in line with it.
    /// `None` while the detail is loading or after it failed to load.
    fn synced_history(&self) -> Option<Vec<LeaveHistoryEntry>> {
        let history = untrack(|| self.detail_resource.get())
            .and_then(Result::ok)
            .map(|detail| detail.leave_history)?;
        self.decisions.update(|tracker| {
            tracker.sync_entries(history.iter().map(|entry| entry.application_id))
        });
        Some(history)
    }

    fn refresh_detail(&self) {
        self.cache
            .invalidate(&keys::leave_detail(self.application.with_value(|a| a.id)));
    }

    pub fn approve(&self, target: DecisionTarget) {
        self.decide(target, DecisionOutcome::Approved, None);
    }

    pub fn open_reject(&self, target: RejectTarget) {
        if self.read_only {
            return;
        }
        self.reject_target.set(Some(target));
    }

    pub fn cancel_reject(&self) {
        self.reject_target.set(None);
    }

    /// Sends the rejection chosen in the dialog; a blank reason never leaves the client.
    pub fn confirm_reject(&self) {
        let Some(target) = self.reject_target.get_untracked() else {
            return;
        };
        let reason = match validate_reason(&self.leave_reason.get_untracked()) {
            Ok(reason) => reason,
            Err(err) => {
                self.toasts.api_error(&err);
                return;
            }
        };
        self.reject_target.set(None);
        match target {
            RejectTarget::Entry(target) => {
                self.decide(target, DecisionOutcome::Rejected, Some(reason))
            }
            RejectTarget::Remaining => self.decide_remaining(DecisionOutcome::Rejected, Some(reason)),
        }
    }

    pub fn approve_all(&self) {
        self.decide_remaining(DecisionOutcome::Approved, None);
    }

    fn decide(&self, target: DecisionTarget, outcome: DecisionOutcome, reason: Option<String>) {
        if self.read_only || self.synced_history().is_none() {
            return;
        }
        let started = self
            .decisions
            .try_update(|tracker| tracker.begin(target.entry_id, outcome))
            .unwrap_or(false);
        if !started {
            return;
        }
        let this = *self;
        let repo = self.repository.get_value();
        spawn_local(async move {
            let result = repo.decide(target, outcome, reason).await;
            this.decisions
                .update(|tracker| tracker.settle(target.entry_id, &result));
            match result {
                Ok(()) => this.refresh_detail(),
                Err(err) => {
                    this.toasts.api_error(&err);
                }
            }
        });
    }

    fn decide_remaining(&self, outcome: DecisionOutcome, reason: Option<String>) {
        if self.read_only || self.bulk_running.get_untracked() {
            return;
        }
        let Some(history) = self.synced_history() else {
            self.toasts.error("Leave details are not loaded yet.");
            return;
        };
        let ids = self.decisions.with_untracked(DecisionTracker::undecided_targets);
        let targets = decision_targets(&history, &ids);
        if targets.is_empty() {
            self.toasts.info("Every leave day already has a decision.");
            return;
        }
        self.decisions.update(|tracker| {
            for target in &targets {
                tracker.begin(target.entry_id, outcome);
            }
        });
        self.bulk_running.set(true);

        let this = *self;
        let repo = self.repository.get_value();
        spawn_local(async move {
            let report = repo.decide_all(targets, outcome, reason).await;
            this.decisions.update(|tracker| tracker.apply_report(&report));
            this.bulk_running.set(false);
            match report.failure_summary() {
                Some(summary) => {
                    this.toasts.error(summary);
                }
                None => {
                    this.toasts.success(format!(
                        "{} {} leave day(s).",
                        outcome.label(),
                        report.succeeded()
                    ));
                }
            }
            this.refresh_detail();
        });
    }

    pub fn can_submit(&self) -> Signal<bool> {
        let decisions = self.decisions;
        let bulk_running = self.bulk_running;
        let pending = self.submit_action.pending();
        let detail_resource = self.detail_resource;
        let read_only = self.read_only;
        Signal::derive(move || {
            let covered = match detail_resource.get() {
                Some(Ok(detail)) => decisions.with(|tracker| {
                    tracker.covers(detail.leave_history.iter().map(|entry| entry.application_id))
                }),
                _ => false,
            };
            !read_only
                && covered
                && !bulk_running.get()
                && !pending.get()
        })
    }

    pub fn submit(&self) {
        if self.read_only {
            return;
        }
        if self.submit_action.pending().get_untracked() || self.bulk_running.get_untracked() {
            return;
        }
        let Some(history) = self.synced_history() else {
            self.toasts.error("Leave details are not loaded yet.");
            return;
        };
        let covered = self.decisions.with_untracked(|tracker| {
            tracker.covers(history.iter().map(|entry| entry.application_id))
        });
        if !covered {
            self.toasts
                .error("Every leave day needs a decision before submitting.");
            return;
        }
        let application = self.application.get_value();
        let request = SubmitApprovalRequest {
            employee_id: application.employee_id,
            id: application.id,
            leave_type: application.leave_type,
            reason: self.leave_reason.get_untracked().trim().to_string(),
            document: self.selected_document.get_untracked(),
        };
        self.submit_action.dispatch(request);
    }

    /// Keeps the previous selection when the new file is not a PDF.
    pub fn select_document(&self, document: SelectedDocument) {
        match validate_document(document) {
            Ok(document) => self.selected_document.set(Some(document)),
            Err(err) => {
                self.toasts.api_error(&err);
            }
        }
    }

    pub fn print(&self) {
        let repo = self.repository.get_value();
        let toasts = self.toasts;
        let id = self.application.with_value(|a| a.id);
        spawn_local(async move {
            let result = match repo.print_data(id).await {
                Ok(data) => download::open_print_window(&render_print_html(&data)),
                Err(err) => Err(err),
            };
            if let Err(err) = result {
                log::error!("printing leave {} failed: {}", id, err);
                toasts.api_error(&err);
            }
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::LeaveType;
    use crate::state::toast::ToastLevel;
    use crate::test_support::helpers::{history_entry, leave};
    use crate::test_support::ssr::{settle, with_local_runtime_async};
    use serde_json::json;

    const DETAIL_PATH: &str = "/api/LeaveApproval/leave/detail";
    const TEMP_APPROVE_PATH: &str = "/api/LeaveApproval/tempApprove";
    const SUBMIT_PATH: &str = "/api/LeaveApproval/submitApprove";
    use crate::test_support::ssr::with_runtime_without_resources;

    fn pdf(name: &str) -> SelectedDocument {
        SelectedDocument {
            file_name: name.into(),
            mime_type: "application/pdf".into(),
            bytes: b"%PDF".to_vec(),
        }
    }

    #[test]
    fn blank_reject_reason_toasts_and_keeps_dialog_open() {
        with_runtime_without_resources(|| {
            let vm = LeaveDetailViewModel::new(leave(1, "EMP001"), Callback::new(|_| {}));
            vm.decisions.set(DecisionTracker::new([10]));
            vm.open_reject(RejectTarget::Remaining);
            vm.leave_reason.set("   ".into());

            vm.confirm_reject();

            assert_eq!(vm.reject_target.get(), Some(RejectTarget::Remaining));
            assert!(!vm.decisions.with(DecisionTracker::any_in_flight));
            let toasts = use_toasts().items().get();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].level, ToastLevel::Error);
            assert_eq!(toasts[0].message, "Please enter a reason for rejection.");
        });
    }

    #[test]
    fn non_pdf_upload_keeps_previous_selection() {
        with_runtime_without_resources(|| {
            let vm = LeaveDetailViewModel::new(leave(1, "EMP001"), Callback::new(|_| {}));
            vm.select_document(SelectedDocument {
                file_name: "scan.png".into(),
                mime_type: "image/png".into(),
                bytes: vec![0],
            });
            assert_eq!(vm.selected_document.get(), None);

            vm.select_document(pdf("first.pdf"));
            vm.select_document(SelectedDocument {
                file_name: "notes.docx".into(),
                mime_type: "application/msword".into(),
                bytes: vec![0],
            });
            assert_eq!(
                vm.selected_document.get().map(|d| d.file_name),
                Some("first.pdf".to_string())
            );

            vm.select_document(pdf("second.pdf"));
            assert_eq!(
                vm.selected_document.get().map(|d| d.file_name),
                Some("second.pdf".to_string())
            );
            assert_eq!(use_toasts().items().get().len(), 2);
        });
    }

    #[test]
    fn submit_is_refused_before_details_load() {
        with_runtime_without_resources(|| {
            let vm = LeaveDetailViewModel::new(leave(1, "EMP001"), Callback::new(|_| {}));
            assert!(!vm.can_submit().get());
            vm.submit();
            assert!(vm.submit_action.input().get().is_none());
            assert_eq!(vm.submit_action.version().get(), 0);
            assert_eq!(
                use_toasts().items().get()[0].message,
                "Leave details are not loaded yet."
            );
        });
    }

    #[test]
    fn read_only_tabs_ignore_decisions() {
        with_runtime_without_resources(|| {
            let mut approved = leave(2, "EMP002");
            approved.status = LeaveStatus::Approved;
            let vm = LeaveDetailViewModel::new(approved, Callback::new(|_| {}));
            assert!(vm.read_only);
            vm.open_reject(RejectTarget::Remaining);
            assert_eq!(vm.reject_target.get(), None);
        });
    }

    #[test]
    fn decision_targets_follow_history_leave_types() {
        let mut medical = history_entry(2, 11);
        medical.leave_type = crate::api::LeaveType::Medical;
        let history = vec![history_entry(1, 10), medical];
        let targets = decision_targets(&history, &[2, 99]);
        assert_eq!(
            targets,
            vec![DecisionTarget {
                entry_id: 2,
                leave_type: crate::api::LeaveType::Medical
            }]
        );
    }

    #[test]
    fn reopening_replaces_selection() {
        with_runtime_without_resources(|| {
            let vm = LeavesViewModel::new();
            vm.open_detail(leave(1, "EMP001"));
            vm.open_detail(leave(2, "EMP002"));
            assert_eq!(vm.selected.get().map(|l| l.id), Some(2));
            vm.close_detail();
            assert_eq!(vm.selected.get(), None);
        });
    }

    fn detail_json(entry_ids: &[i64]) -> serde_json::Value {
        let history: Vec<_> = entry_ids
            .iter()
            .map(|id| json!({ "applicationId": id, "date": "2025-01-10", "leaveType": "CL" }))
            .collect();
        json!({
            "balance": { "casual": { "remaining": 4.0, "assigned": 10.0 } },
            "detail": {
                "id": 1,
                "employeeId": 10,
                "employeeCode": "EMP001",
                "leaveType": "CL",
                "appliedDate": "2025-01-02",
                "duration": 2.0,
                "date": "2025-01-10",
                "status": "pending"
            },
            "leaveHistory": history
        })
    }

    fn detail_vm(server: &MockServer, on_close: Callback<()>) -> LeaveDetailViewModel {
        provide_context(ApiClient::new_with_base_url(server.url("/api")));
        LeaveDetailViewModel::new(leave(1, "EMP001"), on_close)
    }

    #[test]
    fn submit_stays_closed_until_loaded_entries_are_decided() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.success(DETAIL_PATH, detail_json(&[51, 52]));
            server.success(TEMP_APPROVE_PATH, json!(null));
            let vm = detail_vm(&server, Callback::new(|_| {}));
            settle().await;

            assert!(matches!(vm.detail_resource.get(), Some(Ok(_))));
            assert!(!vm.can_submit().get());

            vm.approve(DecisionTarget {
                entry_id: 51,
                leave_type: LeaveType::Casual,
            });
            settle().await;

            assert_eq!(
                vm.decisions.with(DecisionTracker::decisions),
                vec![(51, DecisionOutcome::Approved)]
            );
            assert!(!vm.can_submit().get());
            vm.submit();
            settle().await;
            assert_eq!(server.hits(SUBMIT_PATH), 0);
        });
    }

    #[test]
    fn approve_all_decides_every_entry_then_submit_closes_detail() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.success(DETAIL_PATH, detail_json(&[51, 52]));
            server.success(TEMP_APPROVE_PATH, json!(null));
            server.mock(|when, then| {
                when.path(SUBMIT_PATH);
                then.status(200)
                    .json_body(json!({ "status": "success", "message": "Submitted" }));
            });
            let closed = create_rw_signal(false);
            let vm = detail_vm(&server, Callback::new(move |_| closed.set(true)));
            let cache = expect_context::<QueryCache>();
            settle().await;

            vm.approve_all();
            settle().await;
            settle().await;

            let sent = server.received(TEMP_APPROVE_PATH);
            assert_eq!(sent.len(), 2);
            let mut ids: Vec<_> = sent
                .iter()
                .map(|req| {
                    let body = req.body.clone().unwrap();
                    assert_eq!(body["Tapprove"], json!(1));
                    body["id"].as_i64().unwrap()
                })
                .collect();
            ids.sort();
            assert_eq!(ids, vec![51, 52]);
            assert_eq!(
                vm.decisions.with(DecisionTracker::decisions),
                vec![(51, DecisionOutcome::Approved), (52, DecisionOutcome::Approved)]
            );
            assert!(!vm.bulk_running.get());
            assert!(vm.can_submit().get());

            vm.submit();
            settle().await;

            assert_eq!(server.hits(SUBMIT_PATH), 1);
            assert_eq!(cache.version(&keys::leave_list(LeaveStatus::Pending)), 1);
            assert!(closed.get());
            let toasts = use_toasts().items().get();
            assert_eq!(toasts.last().map(|t| t.level), Some(ToastLevel::Success));
            assert_eq!(toasts.last().map(|t| t.message.as_str()), Some("Submitted"));
        });
    }

    #[test]
    fn failed_detail_never_submits() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.path(DETAIL_PATH);
                then.status(200)
                    .json_body(json!({ "status": "failed", "message": "Not found" }));
            });
            server.success(SUBMIT_PATH, json!(null));
            let closed = create_rw_signal(false);
            let vm = detail_vm(&server, Callback::new(move |_| closed.set(true)));
            settle().await;

            assert!(matches!(vm.detail_resource.get(), Some(Err(_))));
            assert!(!vm.can_submit().get());
            vm.approve_all();
            vm.submit();
            settle().await;

            assert_eq!(server.hits(TEMP_APPROVE_PATH), 0);
            assert_eq!(server.hits(SUBMIT_PATH), 0);
            assert!(!closed.get());
            assert!(vm.decisions.with(DecisionTracker::decisions).is_empty());
        });
    }

    #[test]
    fn repeated_approve_does_not_reopen_the_gate() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.success(DETAIL_PATH, detail_json(&[51]));
            server.success(TEMP_APPROVE_PATH, json!(null));
            let vm = detail_vm(&server, Callback::new(|_| {}));
            settle().await;
            let target = DecisionTarget {
                entry_id: 51,
                leave_type: LeaveType::Casual,
            };

            vm.approve(target);
            settle().await;
            assert!(vm.can_submit().get());

            vm.approve(target);
            assert!(vm.can_submit().get());
            settle().await;
            assert_eq!(server.hits(TEMP_APPROVE_PATH), 1);
        });
    }
}
