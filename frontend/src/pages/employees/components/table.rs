use leptos::*;

use crate::api::Employee;
use crate::components::{
    data_table::{SortState, TableHeader},
    empty_state::EmptyState,
    pagination::Pagination,
};
use crate::pages::employees::utils::{EmployeePage, EMPLOYEE_COLUMNS};

#[component]
pub fn EmployeeTable(
    #[prop(into)] page_view: Signal<EmployeePage>,
    sort: RwSignal<Option<SortState>>,
    page: RwSignal<usize>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let rows = Signal::derive(move || page_view.get().rows);
    let total_pages = Signal::derive(move || page_view.get().page_count);

    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <TableHeader columns=EMPLOYEE_COLUMNS sort=sort/>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || rows.get()
                        key=|employee| employee.id
                        children=move |employee: Employee| {
                            view! {
                                <tr>
                                    <td class="px-4 py-2 text-sm font-medium text-fg">{employee.employee_code}</td>
                                    <td class="px-4 py-2 text-sm">{employee.name}</td>
                                    <td class="px-4 py-2 text-sm">{employee.department.unwrap_or_default()}</td>
                                    <td class="px-4 py-2 text-sm">{employee.designation.unwrap_or_default()}</td>
                                    <td class="px-4 py-2 text-sm">{employee.email.unwrap_or_default()}</td>
                                    <td class="px-4 py-2 text-sm">
                                        {employee.joining_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()}
                                    </td>
                                    <td class="px-4 py-2 text-sm">
                                        {if employee.active { "Active" } else { "Inactive" }}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || !loading.get() && rows.get().is_empty()>
                <EmptyState title="No employees found"/>
            </Show>
            <Pagination page=page total_pages=total_pages/>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::employees::utils::{employee_page, fixtures::employee};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn table_renders_rows_and_sortable_headers() {
        let html = render_to_string(move || {
            let staff = vec![
                employee(1, "EMP001", "Alice", "Engineering"),
                employee(2, "EMP002", "Bob", "Finance"),
            ];
            let page = employee_page(&staff, "", None, 1);
            view! {
                <EmployeeTable
                    page_view=Signal::derive(move || page.clone())
                    sort=create_rw_signal(None)
                    page=create_rw_signal(1)
                    loading=Signal::derive(|| false)
                />
            }
        });
        assert!(html.contains("EMP001"));
        assert!(html.contains("Finance"));
        assert!(html.contains("emp001@example.com"));
        assert!(html.contains("Department"));
        assert!(html.contains("<button"));
    }
}
