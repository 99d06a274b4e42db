use leptos::*;

use crate::pages::leaves::{
    components::{
        detail_modal::LeaveDetailModal,
        filter::{LeaveFilter, LeaveTabs},
        list::LeaveList,
    },
    layout::LeavesLayout,
    view_model::LeavesViewModel,
};

#[component]
pub fn LeavesPage() -> impl IntoView {
    let vm = LeavesViewModel::new();
    let list_resource = vm.list_resource;
    let loading = list_resource.loading();
    let on_close = Callback::new(move |_| vm.close_detail());

    view! {
        <LeavesLayout>
            <LeaveTabs list_state=vm.list_state/>
            <LeaveFilter list_state=vm.list_state/>
            <LeaveList
                page_view=vm.page_view()
                loading=loading
                error=vm.list_error()
                page=vm.list_state.page()
                on_select=Callback::new(move |application| vm.open_detail(application))
            />
            {move || {
                vm.selected
                    .get()
                    .map(|application| view! { <LeaveDetailModal application=application on_close=on_close/> })
            }}
        </LeavesLayout>
    }
}
