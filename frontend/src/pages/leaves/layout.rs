use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn LeavesLayout(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Leave Approval"</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        "Review leave applications and decide each requested day."
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
