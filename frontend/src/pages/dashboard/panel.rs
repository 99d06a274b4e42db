use crate::pages::dashboard::{
    components::{ActivityLookup, AttendanceChartSection, LeaveChartSection, SummarySection},
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <DashboardFrame>
            <SummarySection counts=vm.counts_resource/>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <LeaveChartSection year=vm.chart_year chart=vm.leave_chart_resource/>
                <AttendanceChartSection vm=vm/>
            </div>
            <ActivityLookup vm=vm/>
        </DashboardFrame>
    }
}
