use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub color_class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub values: Vec<f64>,
}

pub fn max_value(rows: &[ChartRow]) -> f64 {
    rows.iter()
        .flat_map(|row| row.values.iter().copied())
        .fold(0.0, f64::max)
}

/// Bar height as a percentage of the tallest bar, 0 when everything is 0.
pub fn bar_height_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || value <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).min(100.0)
    }
}

/// Grouped vertical bar chart drawn with plain elements.
#[component]
pub fn BarChart(
    #[prop(into)] title: String,
    series: &'static [ChartSeries],
    #[prop(into)] rows: Signal<Vec<ChartRow>>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4">
            <h3 class="text-lg font-medium text-fg">{title}</h3>
            <div class="flex gap-3 mt-2 text-xs text-fg-muted">
                {series
                    .iter()
                    .map(|s| view! {
                        <span class="inline-flex items-center gap-1">
                            <span class=format!("inline-block w-3 h-3 rounded {}", s.color_class)></span>
                            {s.name}
                        </span>
                    })
                    .collect_view()}
            </div>
            <div class="flex items-end gap-4 h-48 mt-4 overflow-x-auto">
                {move || {
                    let rows = rows.get();
                    let max = max_value(&rows);
                    rows.into_iter()
                        .map(|row| {
                            view! {
                                <div class="flex flex-col items-center h-full justify-end min-w-[2.5rem]">
                                    <div class="flex items-end gap-0.5 h-full">
                                        {row
                                            .values
                                            .iter()
                                            .zip(series.iter())
                                            .map(|(value, s)| view! {
                                                <div
                                                    class=format!("w-3 rounded-t {}", s.color_class)
                                                    style=format!("height: {:.1}%", bar_height_percent(*value, max))
                                                    title=format!("{}: {}", s.name, value)
                                                ></div>
                                            })
                                            .collect_view()}
                                    </div>
                                    <span class="mt-1 text-xs text-fg-muted">{row.label.clone()}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
