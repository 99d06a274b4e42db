use leptos::*;

use crate::api::EmployeeActivity;
use crate::components::{
    common::{Button, ButtonVariant},
    empty_state::EmptyState,
    error::InlineErrorMessage,
};
use crate::pages::dashboard::view_model::DashboardViewModel;

#[component]
pub fn ActivityLookup(vm: DashboardViewModel) -> impl IntoView {
    let code = vm.activity_code;
    let error = vm.activity_error;
    let action = vm.activity_action;
    let activities = Signal::derive(move || {
        action
            .value()
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });
    let searched = Signal::derive(move || matches!(action.value().get(), Some(Ok(_))));

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-fg">"Employee activity"</h3>
            <form
                class="flex gap-2"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.lookup_activity();
                }
            >
                <input
                    type="text"
                    class="flex-1 border rounded px-2 py-1 text-sm"
                    placeholder="Employee code"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(event_target_value(&ev))
                />
                <Button
                    variant=ButtonVariant::Primary
                    loading=action.pending()
                    on_click=Callback::new(move |_| vm.lookup_activity())
                >
                    "Look up"
                </Button>
            </form>
            <InlineErrorMessage error=Signal::derive(move || error.get())/>
            <Show when=move || searched.get() && activities.get().is_empty()>
                <EmptyState title="No recent activity"/>
            </Show>
            <ul class="divide-y divide-border">
                <For
                    each=move || activities.get()
                    key=|item: &EmployeeActivity| (item.date, item.activity.clone())
                    children=move |item: EmployeeActivity| {
                        view! {
                            <li class="py-2 text-sm">
                                <span class="text-fg-muted mr-2">{item.date.format("%Y-%m-%d").to_string()}</span>
                                <span class="text-fg">{item.activity}</span>
                                {item.detail.map(|detail| view! { <span class="ml-2 text-fg-muted">{detail}</span> })}
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
