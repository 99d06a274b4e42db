use leptos::*;

#[component]
pub fn Pagination(page: RwSignal<usize>, #[prop(into)] total_pages: Signal<usize>) -> impl IntoView {
    let has_prev = move || page.get() > 1;
    let has_next = move || page.get() < total_pages.get();
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="flex items-center justify-between px-4 py-3" aria-label="Pagination">
                <button
                    type="button"
                    class="px-3 py-1 text-sm rounded border border-border disabled:opacity-50"
                    disabled=move || !has_prev()
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span class="text-sm text-fg-muted">
                    {move || format!("Page {} of {}", page.get(), total_pages.get())}
                </span>
                <button
                    type="button"
                    class="px-3 py-1 text-sm rounded border border-border disabled:opacity-50"
                    disabled=move || !has_next()
                    on:click=move |_| {
                        let last = total_pages.get_untracked();
                        page.update(|p| *p = (*p + 1).min(last.max(1)))
                    }
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
