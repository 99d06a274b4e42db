use leptos::*;

use crate::api::{EntryApproval, LeaveHistoryEntry};
use crate::pages::leaves::{
    components::status_label::entry_state_label,
    decisions::{DecisionTracker, EntryState},
    repository::DecisionTarget,
};

fn approval_label(approval: EntryApproval) -> (&'static str, &'static str) {
    match approval {
        EntryApproval::Pending => ("Pending", "bg-gray-100 text-gray-800"),
        EntryApproval::Approved => ("Approved", "bg-green-100 text-green-800"),
        EntryApproval::Rejected => ("Rejected", "bg-red-100 text-red-800"),
    }
}

#[component]
pub fn LeaveHistoryTable(
    #[prop(into)] history: Signal<Vec<LeaveHistoryEntry>>,
    decisions: RwSignal<DecisionTracker>,
    read_only: bool,
    on_approve: Callback<DecisionTarget>,
    on_reject: Callback<DecisionTarget>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Date"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Type"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Decision"</th>
                        <Show when=move || !read_only>
                            <th class="px-4 py-2 text-right text-xs font-medium text-fg-muted uppercase">"Actions"</th>
                        </Show>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || history.get()
                        key=|entry| entry.application_id
                        children=move |entry: LeaveHistoryEntry| {
                            let target = DecisionTarget {
                                entry_id: entry.application_id,
                                leave_type: entry.leave_type,
                            };
                            let approval = entry.approval;
                            let state = move || decisions.with(|t| t.state(target.entry_id));
                            let busy = move || state().is_in_flight();
                            let failure = move || match state() {
                                EntryState::Failed { message, .. } => Some(message),
                                _ => None,
                            };
                            view! {
                                <tr>
                                    <td class="px-4 py-2 text-sm text-fg">{entry.period_label()}</td>
                                    <td class="px-4 py-2 text-sm">{entry.leave_type.label()}</td>
                                    <td class="px-4 py-2 text-sm">
                                        {move || {
                                            let (label, class) = if read_only {
                                                let (label, class) = approval_label(approval);
                                                (label.to_string(), class)
                                            } else {
                                                entry_state_label(&state())
                                            };
                                            view! {
                                                <span class=format!("inline-flex px-2 py-0.5 rounded-full text-xs font-medium {}", class)>
                                                    {label}
                                                </span>
                                            }
                                        }}
                                        {move || failure().map(|message| view! {
                                            <p class="mt-1 text-xs text-status-error-text">{message}</p>
                                        })}
                                    </td>
                                    <Show when=move || !read_only>
                                        <td class="px-4 py-2 text-right space-x-2 whitespace-nowrap">
                                            <button
                                                type="button"
                                                class="px-3 py-1 rounded text-xs font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                                disabled=busy
                                                on:click=move |_| on_approve.call(target)
                                            >
                                                "Approve"
                                            </button>
                                            <button
                                                type="button"
                                                class="px-3 py-1 rounded text-xs font-semibold bg-action-danger-bg text-action-danger-text disabled:opacity-50"
                                                disabled=busy
                                                on:click=move |_| on_reject.call(target)
                                            >
                                                "Reject"
                                            </button>
                                        </td>
                                    </Show>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::detail_with_entries;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn editable_history_shows_actions_and_local_state() {
        let html = render_to_string(move || {
            let detail = detail_with_entries(1, 2);
            let tracker = DecisionTracker::new(detail.leave_history.iter().map(|e| e.application_id));
            let decisions = create_rw_signal(tracker);
            decisions.update(|t| {
                t.begin(100, crate::pages::leaves::decisions::DecisionOutcome::Approved);
                t.confirm(100);
            });
            let history = detail.leave_history.clone();
            view! {
                <LeaveHistoryTable
                    history=Signal::derive(move || history.clone())
                    decisions=decisions
                    read_only=false
                    on_approve=Callback::new(|_| {})
                    on_reject=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("2025-01-10"));
        assert!(html.contains("2025-01-11"));
        assert!(html.contains("Approve"));
        assert!(html.contains("Approved"));
        assert!(html.contains("Pending"));
    }

    #[test]
    fn read_only_history_hides_actions() {
        let html = render_to_string(move || {
            let mut detail = detail_with_entries(1, 1);
            detail.leave_history[0].approval = EntryApproval::Rejected;
            let history = detail.leave_history.clone();
            view! {
                <LeaveHistoryTable
                    history=Signal::derive(move || history.clone())
                    decisions=create_rw_signal(DecisionTracker::default())
                    read_only=true
                    on_approve=Callback::new(|_| {})
                    on_reject=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Rejected"));
        assert!(!html.contains("Actions"));
    }
}
