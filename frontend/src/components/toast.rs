use leptos::*;

use crate::state::toast::use_toasts;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="fixed top-4 right-4 z-[80] flex flex-col gap-2 w-80" aria-live="polite">
            <For
                each=move || toasts.items().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("border rounded-md px-4 py-3 shadow flex justify-between gap-2 {}", toast.level.css_class())>
                            <p class="text-sm">{toast.message}</p>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="text-xs opacity-70 hover:opacity-100"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn toast_host_renders_queued_messages() {
        let html = render_to_string(move || {
            let toasts = use_toasts();
            toasts.error("Only PDF documents can be uploaded.");
            toasts.success("Leave submitted");
            view! { <ToastHost/> }
        });
        assert!(html.contains("Only PDF documents can be uploaded."));
        assert!(html.contains("Leave submitted"));
        assert!(html.contains("bg-red-50"));
    }
}
