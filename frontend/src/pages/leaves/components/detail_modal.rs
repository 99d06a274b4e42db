use leptos::ev::KeyboardEvent;
use leptos::*;

use crate::api::{ApiError, LeaveApplication};
use crate::components::{
    cards::BalanceCard,
    common::{Button, ButtonVariant},
    error::InlineErrorMessage,
    layout::LoadingSpinner,
    reason_dialog::ReasonDialog,
};
use crate::pages::leaves::{
    components::{history_table::LeaveHistoryTable, status_label::LeaveStatusLabel},
    utils::PDF_MIME,
    view_model::{LeaveDetailViewModel, RejectTarget},
};
use crate::utils::download;

#[component]
pub fn LeaveDetailModal(application: LeaveApplication, on_close: Callback<()>) -> impl IntoView {
    let summary = application.clone();
    let vm = LeaveDetailViewModel::new(application, on_close);
    let detail_resource = vm.detail_resource;
    let loading = detail_resource.loading();

    let detail = Signal::derive(move || detail_resource.get().and_then(Result::ok));
    let detail_error: Signal<Option<ApiError>> =
        Signal::derive(move || detail_resource.get().and_then(Result::err));
    let history = Signal::derive(move || {
        detail
            .get()
            .map(|detail| detail.leave_history)
            .unwrap_or_default()
    });
    let balance = Signal::derive(move || detail.get().map(|d| d.balance).unwrap_or_default());
    let can_submit = vm.can_submit();
    let submitting = vm.submit_action.pending();
    let bulk_running = vm.bulk_running;
    let read_only = vm.read_only;
    let reject_target = vm.reject_target;

    let reject_title = Signal::derive(move || match reject_target.get() {
        Some(RejectTarget::Remaining) => "Reject remaining leave days".to_string(),
        _ => "Reject leave day".to_string(),
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            match download::read_file(file).await {
                Ok(document) => vm.select_document(document),
                Err(err) => log::warn!("reading the selected document failed: {}", err),
            }
        });
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <button
                type="button"
                aria-label="Close"
                class="absolute inset-0 bg-overlay-backdrop"
                on:click=move |_| on_close.call(())
            ></button>
            <div
                class="relative z-[51] w-full max-w-4xl max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl p-6 space-y-6"
                role="dialog"
                aria-modal="true"
                aria-labelledby="leave-detail-title"
                tabindex="-1"
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" && reject_target.get_untracked().is_none() {
                        ev.prevent_default();
                        on_close.call(());
                    }
                }
            >
                <div class="flex items-start justify-between">
                    <div>
                        <h2 id="leave-detail-title" class="text-lg font-semibold text-fg">
                            {format!("{} · {}", summary.employee_code, summary.leave_type.label())}
                        </h2>
                        <p class="text-sm text-fg-muted">
                            {summary.employee_name.clone().unwrap_or_default()}
                            " · "
                            {summary.period_label()}
                            " · "
                            {format!("{} day(s)", summary.duration)}
                        </p>
                        <p class="text-sm text-fg-muted">
                            {summary.reason.clone().unwrap_or_default()}
                        </p>
                    </div>
                    <LeaveStatusLabel status=summary.status/>
                </div>

                <InlineErrorMessage error=detail_error/>
                <Show when=move || loading.get()>
                    <LoadingSpinner/>
                </Show>

                <Show when=move || detail.get().is_some()>
                    <BalanceCard balance=balance/>
                    <LeaveHistoryTable
                        history=history
                        decisions=vm.decisions
                        read_only=read_only
                        on_approve=Callback::new(move |target| vm.approve(target))
                        on_reject=Callback::new(move |target| vm.open_reject(RejectTarget::Entry(target)))
                    />
                </Show>

                <Show when=move || !read_only>
                    <div class="flex flex-wrap gap-2">
                        <Button
                            variant=ButtonVariant::Success
                            loading=Signal::derive(move || bulk_running.get())
                            on_click=Callback::new(move |_| vm.approve_all())
                        >
                            "Approve all"
                        </Button>
                        <Button
                            variant=ButtonVariant::Danger
                            disabled=Signal::derive(move || bulk_running.get())
                            on_click=Callback::new(move |_| vm.open_reject(RejectTarget::Remaining))
                        >
                            "Reject all"
                        </Button>
                    </div>
                    <div class="space-y-2">
                        <label class="block text-sm font-medium text-fg-muted" for="leave-document">
                            "Supporting document (PDF)"
                        </label>
                        <input
                            id="leave-document"
                            type="file"
                            accept=PDF_MIME
                            class="block text-sm"
                            on:change=on_file_change
                        />
                        {move || vm.selected_document.get().map(|doc| view! {
                            <p class="text-xs text-fg-muted">{doc.file_name}</p>
                        })}
                    </div>
                </Show>

                <div class="flex justify-end gap-2 border-t border-border pt-4">
                    <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_| vm.print())>
                        "Print"
                    </Button>
                    <Button variant=ButtonVariant::Secondary on_click=on_close>
                        "Close"
                    </Button>
                    <Show when=move || !read_only>
                        <Button
                            variant=ButtonVariant::Primary
                            disabled=Signal::derive(move || !can_submit.get())
                            loading=submitting
                            on_click=Callback::new(move |_| vm.submit())
                        >
                            "Submit"
                        </Button>
                    </Show>
                </div>
            </div>

            <ReasonDialog
                is_open=Signal::derive(move || reject_target.get().is_some())
                title=reject_title
                reason=vm.leave_reason
                on_confirm=Callback::new(move |_| vm.confirm_reject())
                on_cancel=Callback::new(move |_| vm.cancel_reject())
                busy=Signal::derive(move || bulk_running.get())
            />
        </div>
    }
}
