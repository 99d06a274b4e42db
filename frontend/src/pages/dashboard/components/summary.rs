use leptos::*;

use crate::api::DashboardCounts;
use crate::components::{cards::StatCard, error::InlineErrorMessage};
use crate::state::query::QueryResource;

#[component]
pub fn SummarySection(counts: QueryResource<DashboardCounts>) -> impl IntoView {
    let data = Signal::derive(move || counts.get().and_then(Result::ok).unwrap_or_default());
    let error = Signal::derive(move || counts.get().and_then(Result::err));
    let metric = move |pick: fn(&DashboardCounts) -> u32| {
        Signal::derive(move || {
            if counts.loading().get() {
                "…".to_string()
            } else {
                pick(&data.get()).to_string()
            }
        })
    };

    view! {
        <section class="space-y-3">
            <InlineErrorMessage error=error/>
            <dl class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-5">
                <StatCard title="Employees" value=metric(|c| c.total_employees)/>
                <StatCard title="Present today" value=metric(|c| c.present_today)/>
                <StatCard title="On leave today" value=metric(|c| c.on_leave_today)/>
                <StatCard title="Late today" value=metric(|c| c.late_today)/>
                <StatCard title="Pending leaves" value=metric(|c| c.pending_leaves) hint="Awaiting approval"/>
            </dl>
        </section>
    }
}
