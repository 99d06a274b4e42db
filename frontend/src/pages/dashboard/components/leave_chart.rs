use leptos::*;

use crate::api::LeaveChartPoint;
use crate::components::{charts::BarChart, error::InlineErrorMessage};
use crate::pages::dashboard::utils::{leave_chart_rows, year_options, LEAVE_SERIES};
use crate::state::query::QueryResource;

#[component]
pub fn LeaveChartSection(
    year: RwSignal<i32>,
    chart: QueryResource<Vec<LeaveChartPoint>>,
) -> impl IntoView {
    let options = year_options(year.get_untracked());
    let rows = Signal::derive(move || {
        chart
            .get()
            .and_then(Result::ok)
            .map(|points| leave_chart_rows(&points))
            .unwrap_or_default()
    });
    let error = Signal::derive(move || chart.get().and_then(Result::err));

    view! {
        <section class="space-y-2">
            <label class="flex items-center gap-2 text-sm text-fg-muted">
                "Year"
                <select
                    class="border rounded px-2 py-1 text-sm"
                    prop:value=move || year.get().to_string()
                    on:change=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<i32>() {
                            year.set(value);
                        }
                    }
                >
                    {options
                        .into_iter()
                        .map(|option| view! { <option value=option.to_string()>{option}</option> })
                        .collect_view()}
                </select>
            </label>
            <InlineErrorMessage error=error/>
            <BarChart title="Leaves by month" series=LEAVE_SERIES rows=rows/>
        </section>
    }
}
