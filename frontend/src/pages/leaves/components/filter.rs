use leptos::*;

use crate::api::LeaveStatus;
use crate::pages::leaves::utils::{LeaveListState, SortOrder};

#[component]
pub fn LeaveTabs(list_state: LeaveListState) -> impl IntoView {
    let tab = list_state.tab();
    view! {
        <div class="flex gap-2 border-b border-border" role="tablist">
            {LeaveStatus::ALL
                .iter()
                .map(|status| {
                    let status = *status;
                    let is_active = move || tab.get() == status;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected=move || is_active().to_string()
                            class=move || {
                                if is_active() {
                                    "px-4 py-2 text-sm font-semibold border-b-2 border-action-primary-bg text-fg"
                                } else {
                                    "px-4 py-2 text-sm text-fg-muted hover:text-fg"
                                }
                            }
                            on:click=move |_| list_state.set_tab(status)
                        >
                            {status.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn LeaveFilter(list_state: LeaveListState) -> impl IntoView {
    let code_filter = list_state.code_filter();
    let sort = list_state.sort();
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
            <input
                type="search"
                class="border rounded px-2 py-1 text-sm"
                placeholder="Search by employee code"
                prop:value=move || code_filter.get()
                on:input=move |ev| list_state.set_code_filter(event_target_value(&ev))
            />
            <label class="flex items-center gap-2 text-sm text-fg-muted">
                "Sort"
                <select
                    class="border rounded px-2 py-1 text-sm"
                    prop:value=move || sort.get().as_str()
                    on:change=move |ev| sort.set(SortOrder::from_value(&event_target_value(&ev)))
                >
                    <option value="newest">"Newest first"</option>
                    <option value="oldest">"Oldest first"</option>
                </select>
            </label>
        </div>
    }
}
