use std::rc::Rc;

use leptos::*;

use crate::api::{ApiClient, ApiError, TimeAllocation};
use crate::pages::time_allocation::{
    repository::TimeAllocationRepository,
    utils::{validate_allocation, TimeAllocationForm},
};
use crate::state::{
    query::{keys, use_query, use_query_cache, QueryResource},
    toast::use_toasts,
};

#[derive(Clone, Copy)]
pub struct TimeAllocationViewModel {
    pub form: TimeAllocationForm,
    pub resource: QueryResource<TimeAllocation>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub save_action: Action<TimeAllocation, Result<Option<String>, ApiError>>,
}

impl TimeAllocationViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(TimeAllocationRepository::new_with_client(Rc::new(api)));
        let cache = use_query_cache();
        let toasts = use_toasts();
        let form = TimeAllocationForm::default();

        let resource = use_query(keys::time_allocation, move |_| {
            let repo = repository.get_value();
            async move { repo.load().await }
        });
        create_effect(move |_| {
            if let Some(Ok(allocation)) = resource.get() {
                form.fill(&allocation);
            }
        });

        let save_action = create_action(move |allocation: &TimeAllocation| {
            let repo = repository.get_value();
            let allocation = allocation.clone();
            async move {
                let result = repo.save(allocation).await;
                match &result {
                    Ok(message) => {
                        cache.invalidate(&keys::time_allocation());
                        toasts.success(
                            message
                                .clone()
                                .unwrap_or_else(|| "Time allocation saved.".into()),
                        );
                    }
                    Err(err) => {
                        log::warn!("saving time allocation failed: {}", err);
                        toasts.api_error(err);
                    }
                }
                result
            }
        });

        Self {
            form,
            resource,
            form_error: create_rw_signal(None),
            save_action,
        }
    }

    pub fn save(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        match validate_allocation(&self.form.snapshot()) {
            Ok(allocation) => {
                self.form_error.set(None);
                self.save_action.dispatch(allocation);
            }
            Err(err) => self.form_error.set(Some(err)),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::pages::time_allocation::utils::office_hours;
    use crate::state::{query::QueryCache, toast::ToastLevel};
    use crate::test_support::ssr::{settle, with_local_runtime_async, with_runtime_without_resources};
    use serde_json::json;

    #[test]
    fn invalid_form_is_not_sent() {
        with_runtime_without_resources(|| {
            let vm = TimeAllocationViewModel::new();
            vm.form.fill(&office_hours());
            vm.form.check_in_end.set("07:00".into());

            vm.save();

            assert!(vm.form_error.get().is_some_and(|e| e.is_validation()));
            assert_eq!(vm.save_action.version().get(), 0);
        });
    }

    #[test]
    fn successful_save_invalidates_and_toasts() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.path("/api/TimeAllocation/add-or-modify");
                then.status(200)
                    .json_body(json!({ "status": "success", "message": "Saved" }));
            });
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            leptos_reactive::suppress_resource_load(true);
            let vm = TimeAllocationViewModel::new();
            leptos_reactive::suppress_resource_load(false);
            let cache = expect_context::<QueryCache>();
            vm.form.fill(&office_hours());

            vm.save();
            settle().await;

            let body = server.received("/api/TimeAllocation/add-or-modify")[0]
                .body
                .clone()
                .unwrap();
            assert_eq!(body["lateAfter"], json!("09:15"));
            assert_eq!(vm.save_action.value().get(), Some(Ok(Some("Saved".to_string()))));
            assert_eq!(cache.version(&keys::time_allocation()), 1);
            let toasts = use_toasts().items().get();
            assert_eq!(toasts.last().map(|t| t.level), Some(ToastLevel::Success));
            assert_eq!(toasts.last().map(|t| t.message.as_str()), Some("Saved"));
        });
    }
}
