use crate::api::ApiError;
use leptos::*;

fn show_code(code: &str) -> bool {
    !code.is_empty() && code != "UNKNOWN" && code != "BUSINESS_ERROR"
}

/// Inline rendering of a failed query or mutation.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .filter(|e| show_code(&e.code))
                        .map(|e| view! { <div class="text-xs opacity-75">{"Code: "}{e.code}</div> })
                }}
            </div>
        </Show>
    }
}
