use leptos::*;

use crate::components::{error::InlineErrorMessage, layout::Layout};
use crate::pages::employees::{components::table::EmployeeTable, view_model::EmployeesViewModel};

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = EmployeesViewModel::new();
    let table = vm.table;
    let loading = vm.employees_resource.loading();
    let page_view = vm.visible();
    let total = Signal::derive(move || page_view.get().total);

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-col gap-3 md:flex-row md:items-end md:justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">"Employees"</h1>
                        <p class="mt-1 text-sm text-fg-muted">{move || format!("{} employee(s)", total.get())}</p>
                    </div>
                    <input
                        type="search"
                        class="border rounded px-2 py-1 text-sm"
                        placeholder="Filter by code, name or department"
                        prop:value=move || table.filter.get()
                        on:input=move |ev| table.set_filter(event_target_value(&ev))
                    />
                </div>
                <InlineErrorMessage error=vm.error()/>
                <EmployeeTable page_view=page_view sort=table.sort page=table.page loading=loading/>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn employees_page_renders_filter() {
        let html = render_to_string(move || view! { <EmployeesPage/> });
        assert!(html.contains("Employees"));
        assert!(html.contains("Filter by code, name or department"));
    }
}
