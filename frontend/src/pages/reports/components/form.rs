use leptos::*;

use crate::api::LeaveStatus;
use crate::components::{
    common::{Button, ButtonVariant},
    error::InlineErrorMessage,
    forms::DateRangeInputs,
};
use crate::pages::reports::{utils::ReportKind, view_model::ReportsViewModel};

#[component]
pub fn ReportForm(vm: ReportsViewModel) -> impl IntoView {
    let kind = vm.kind;
    let form_error = vm.form_error;

    view! {
        <form
            class="bg-surface-elevated shadow rounded-lg p-6 space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.run();
            }
        >
            <div class="flex gap-2" role="tablist">
                {ReportKind::ALL
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <button
                                type="button"
                                role="tab"
                                aria-selected=move || (kind.get() == option).to_string()
                                class=move || {
                                    if kind.get() == option {
                                        "px-3 py-1 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                                    } else {
                                        "px-3 py-1 rounded-md text-sm text-fg-muted hover:text-fg"
                                    }
                                }
                                on:click=move |_| kind.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex flex-wrap items-end gap-3">
                <DateRangeInputs from=vm.from to=vm.to/>
                <Show
                    when=move || kind.get() == ReportKind::Attendance
                    fallback=move || view! {
                        <label class="text-sm text-fg-muted">
                            "Status"
                            <select
                                class="block mt-1 rounded-md border border-border px-2 py-1"
                                prop:value=move || vm.status.get()
                                on:change=move |ev| vm.status.set(event_target_value(&ev))
                            >
                                <option value="">"All"</option>
                                {LeaveStatus::ALL
                                    .iter()
                                    .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    }
                >
                    <label class="text-sm text-fg-muted">
                        "Employee code"
                        <input
                            type="text"
                            class="block mt-1 rounded-md border border-border px-2 py-1"
                            placeholder="Optional"
                            prop:value=move || vm.employee_code.get()
                            on:input=move |ev| vm.employee_code.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <Button
                    variant=ButtonVariant::Primary
                    loading=vm.loading()
                    on_click=Callback::new(move |_| vm.run())
                >
                    "Run report"
                </Button>
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| vm.export_current())
                >
                    "Export to Excel"
                </Button>
            </div>
            <InlineErrorMessage error=Signal::derive(move || form_error.get())/>
        </form>
    }
}
