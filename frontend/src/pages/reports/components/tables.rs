use leptos::*;

use crate::api::{AttendanceReportRow, LeaveReportRow};
use crate::components::{
    data_table::{Column, TableHeader},
    empty_state::EmptyState,
};

const ATTENDANCE_COLUMNS: &[Column] = &[
    Column::plain("code", "Code"),
    Column::plain("name", "Name"),
    Column::plain("date", "Date"),
    Column::plain("in", "Check in"),
    Column::plain("out", "Check out"),
    Column::plain("status", "Status"),
];

const LEAVE_COLUMNS: &[Column] = &[
    Column::plain("code", "Code"),
    Column::plain("name", "Name"),
    Column::plain("type", "Type"),
    Column::plain("applied", "Applied"),
    Column::plain("days", "Days"),
    Column::plain("status", "Status"),
];

fn time_cell(value: Option<chrono::NaiveTime>) -> String {
    value
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn AttendanceReportTable(#[prop(into)] rows: Signal<Vec<AttendanceReportRow>>) -> impl IntoView {
    view! {
        <Show
            when=move || !rows.get().is_empty()
            fallback=|| view! { <EmptyState title="No attendance rows" description="Run the report to see results."/> }
        >
            <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <TableHeader columns=ATTENDANCE_COLUMNS/>
                    <tbody class="divide-y divide-border">
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|row| view! {
                                    <tr>
                                        <td class="px-4 py-2 text-sm">{row.employee_code}</td>
                                        <td class="px-4 py-2 text-sm">{row.employee_name.unwrap_or_default()}</td>
                                        <td class="px-4 py-2 text-sm">{row.date.format("%Y-%m-%d").to_string()}</td>
                                        <td class="px-4 py-2 text-sm">{time_cell(row.check_in)}</td>
                                        <td class="px-4 py-2 text-sm">{time_cell(row.check_out)}</td>
                                        <td class="px-4 py-2 text-sm">{row.status}</td>
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[component]
pub fn LeaveReportTable(#[prop(into)] rows: Signal<Vec<LeaveReportRow>>) -> impl IntoView {
    view! {
        <Show
            when=move || !rows.get().is_empty()
            fallback=|| view! { <EmptyState title="No leave rows" description="Run the report to see results."/> }
        >
            <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <TableHeader columns=LEAVE_COLUMNS/>
                    <tbody class="divide-y divide-border">
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|row| view! {
                                    <tr>
                                        <td class="px-4 py-2 text-sm">{row.employee_code}</td>
                                        <td class="px-4 py-2 text-sm">{row.employee_name.unwrap_or_default()}</td>
                                        <td class="px-4 py-2 text-sm">{row.leave_type.label()}</td>
                                        <td class="px-4 py-2 text-sm">{row.applied_date.format("%Y-%m-%d").to_string()}</td>
                                        <td class="px-4 py-2 text-sm">{row.duration}</td>
                                        <td class="px-4 py-2 text-sm">{row.status.label()}</td>
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
