use leptos::*;

use crate::api::{ApiError, LeaveApplication};
use crate::components::{
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::LoadingSpinner,
    pagination::Pagination,
};
use crate::pages::leaves::{components::status_label::LeaveStatusLabel, utils::PageView};

#[component]
pub fn LeaveList(
    #[prop(into)] page_view: Signal<PageView>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    page: RwSignal<usize>,
    on_select: Callback<LeaveApplication>,
) -> impl IntoView {
    let rows = Signal::derive(move || page_view.get().rows);
    let total_pages = Signal::derive(move || page_view.get().page_count);
    view! {
        <div class="bg-surface-elevated shadow rounded-lg">
            <InlineErrorMessage error=error/>
            <Show when=move || loading.get()>
                <LoadingSpinner/>
            </Show>
            <Show when=move || !loading.get() && error.get().is_none() && rows.get().is_empty()>
                <EmptyState title="No leave applications" description="Nothing matches the current tab and filter."/>
            </Show>
            <Show when=move || !rows.get().is_empty()>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Employee"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Type"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Period"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Days"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Applied"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || rows.get()
                                key=|leave| leave.id
                                children=move |leave: LeaveApplication| {
                                    let selected = store_value(leave.clone());
                                    view! {
                                        <tr class="hover:bg-surface-muted cursor-pointer" on:click=move |_| on_select.call(selected.get_value())>
                                            <td class="px-4 py-2 text-sm text-fg">
                                                {leave.employee_code.clone()}
                                                <span class="block text-xs text-fg-muted">
                                                    {leave.employee_name.clone().unwrap_or_default()}
                                                </span>
                                            </td>
                                            <td class="px-4 py-2 text-sm">{leave.leave_type.code()}</td>
                                            <td class="px-4 py-2 text-sm">{leave.period_label()}</td>
                                            <td class="px-4 py-2 text-sm">{leave.duration}</td>
                                            <td class="px-4 py-2 text-sm">{leave.applied_date.format("%Y-%m-%d").to_string()}</td>
                                            <td class="px-4 py-2 text-sm"><LeaveStatusLabel status=leave.status/></td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
            <Pagination page=page total_pages=total_pages/>
        </div>
    }
}
