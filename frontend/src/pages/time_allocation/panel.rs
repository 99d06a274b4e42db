use leptos::*;

use crate::components::{
    common::{Button, ButtonVariant},
    error::InlineErrorMessage,
    forms::TimeInput,
    layout::{Layout, LoadingSpinner},
};
use crate::pages::time_allocation::view_model::TimeAllocationViewModel;

#[component]
pub fn TimeAllocationPage() -> impl IntoView {
    let vm = TimeAllocationViewModel::new();
    let form = vm.form;
    let resource = vm.resource;
    let loading = resource.loading();
    let load_error = Signal::derive(move || resource.get().and_then(Result::err));
    let form_error = vm.form_error;

    view! {
        <Layout>
            <div class="space-y-6 max-w-3xl">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Time Allocation"</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        "Attendance windows used to mark employees late or half-day."
                    </p>
                </div>
                <InlineErrorMessage error=load_error/>
                <Show when=move || loading.get()>
                    <LoadingSpinner/>
                </Show>
                <form
                    class="bg-surface-elevated shadow rounded-lg p-6 space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.save();
                    }
                >
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                        <TimeInput label="Check-in start" value=form.check_in_start/>
                        <TimeInput label="Check-in end" value=form.check_in_end/>
                        <TimeInput label="Check-out start" value=form.check_out_start/>
                        <TimeInput label="Check-out end" value=form.check_out_end/>
                        <TimeInput label="Late after" value=form.late_after/>
                        <TimeInput label="Half day after" value=form.half_day_after/>
                    </div>
                    <InlineErrorMessage error=Signal::derive(move || form_error.get())/>
                    <div class="flex justify-end">
                        <Button
                            variant=ButtonVariant::Primary
                            loading=vm.save_action.pending()
                            on_click=Callback::new(move |_| vm.save())
                        >
                            "Save"
                        </Button>
                    </div>
                </form>
            </div>
        </Layout>
    }
}
