use leptos::*;

use crate::api::{BalanceCount, EmployeeLeaveBalance};

fn format_days(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

pub fn balance_label(count: &BalanceCount) -> String {
    format!("{} / {}", format_days(count.remaining), format_days(count.assigned))
}

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <dt class="text-sm font-medium text-fg-muted truncate">{title}</dt>
                <dd class="mt-1 text-3xl font-semibold text-fg">{move || value.get()}</dd>
                {hint.map(|hint| view! { <p class="mt-1 text-xs text-fg-muted">{hint}</p> })}
            </div>
        </div>
    }
}

/// Remaining / assigned days per leave category.
#[component]
pub fn BalanceCard(#[prop(into)] balance: Signal<EmployeeLeaveBalance>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <h3 class="text-lg leading-6 font-medium text-fg">"Leave balance"</h3>
                <dl class="mt-5 grid grid-cols-2 sm:grid-cols-3 gap-4">
                    {move || {
                        balance
                            .get()
                            .categories()
                            .into_iter()
                            .map(|(label, count)| {
                                view! {
                                    <div>
                                        <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                                        <dd class="mt-1 text-sm text-fg">{balance_label(&count)}</dd>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </dl>
            </div>
        </div>
    }
}
