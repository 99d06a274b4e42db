use leptos::*;

use crate::components::{
    charts::BarChart,
    common::{Button, ButtonVariant},
    error::InlineErrorMessage,
    forms::DateRangeInputs,
};
use crate::pages::dashboard::{
    utils::{attendance_chart_rows, ATTENDANCE_SERIES},
    view_model::DashboardViewModel,
};

#[component]
pub fn AttendanceChartSection(vm: DashboardViewModel) -> impl IntoView {
    let chart = vm.attendance_chart_resource;
    let rows = Signal::derive(move || {
        chart
            .get()
            .and_then(Result::ok)
            .map(|points| attendance_chart_rows(&points))
            .unwrap_or_default()
    });
    let load_error = Signal::derive(move || chart.get().and_then(Result::err));
    let range_error = vm.attendance_range_error;

    view! {
        <section class="space-y-2">
            <div class="flex flex-wrap items-end gap-3">
                <DateRangeInputs from=vm.attendance_from to=vm.attendance_to/>
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| vm.apply_attendance_range())
                >
                    "Apply"
                </Button>
            </div>
            <InlineErrorMessage error=Signal::derive(move || range_error.get())/>
            <InlineErrorMessage error=load_error/>
            <BarChart title="Attendance" series=ATTENDANCE_SERIES rows=rows/>
        </section>
    }
}
