use chrono::NaiveDate;
use leptos::*;

use crate::api::ApiError;

pub fn parse_date(label: &str, raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::validation(format!("{} must be a date (YYYY-MM-DD).", label)))
}

/// Parses both ends of a range and rejects `from > to`.
pub fn parse_date_range(from: &str, to: &str) -> Result<(NaiveDate, NaiveDate), ApiError> {
    let from = parse_date("From", from)?;
    let to = parse_date("To", to)?;
    if from > to {
        return Err(ApiError::validation("From must be on or before To."));
    }
    Ok((from, to))
}

#[component]
pub fn DateRangeInputs(from: RwSignal<String>, to: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-3 items-end">
            <label class="text-sm text-fg-muted">
                "From"
                <input
                    type="date"
                    class="block mt-1 rounded-md border border-border px-2 py-1"
                    prop:value=move || from.get()
                    on:input=move |ev| from.set(event_target_value(&ev))
                />
            </label>
            <label class="text-sm text-fg-muted">
                "To"
                <input
                    type="date"
                    class="block mt-1 rounded-md border border-border px-2 py-1"
                    prop:value=move || to.get()
                    on:input=move |ev| to.set(event_target_value(&ev))
                />
            </label>
        </div>
    }
}

#[component]
pub fn TimeInput(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-fg-muted">
            {label}
            <input
                type="time"
                class="block mt-1 w-full rounded-md border border-border px-2 py-1"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
