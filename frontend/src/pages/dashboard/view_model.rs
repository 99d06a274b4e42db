use std::rc::Rc;

use chrono::NaiveDate;
use leptos::*;

use crate::api::{
    ApiClient, ApiError, AttendanceChartPoint, DashboardCounts, EmployeeActivity, LeaveChartPoint,
};
use crate::components::forms::parse_date_range;
use crate::pages::dashboard::{
    repository::DashboardRepository,
    utils::{default_attendance_range, validate_employee_code},
};
use crate::state::{
    query::{keys, use_query, QueryResource},
    toast::use_toasts,
};
use crate::utils::time;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub counts_resource: QueryResource<DashboardCounts>,
    pub chart_year: RwSignal<i32>,
    pub leave_chart_resource: QueryResource<Vec<LeaveChartPoint>>,
    pub attendance_from: RwSignal<String>,
    pub attendance_to: RwSignal<String>,
    pub attendance_range: RwSignal<(NaiveDate, NaiveDate)>,
    pub attendance_range_error: RwSignal<Option<ApiError>>,
    pub attendance_chart_resource: QueryResource<Vec<AttendanceChartPoint>>,
    pub activity_code: RwSignal<String>,
    pub activity_error: RwSignal<Option<ApiError>>,
    pub activity_action: Action<String, Result<Vec<EmployeeActivity>, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(DashboardRepository::new_with_client(Rc::new(api)));
        let toasts = use_toasts();
        let today = time::today();

        let counts_resource = use_query(keys::dashboard_counts, move |_| {
            let repo = repository.get_value();
            async move { repo.counts().await }
        });

        let chart_year = create_rw_signal(time::current_year());
        let leave_chart_resource = use_query(
            move || keys::dashboard_leave_chart(chart_year.get()),
            move |_| {
                let repo = repository.get_value();
                let year = chart_year.get_untracked();
                async move { repo.leave_chart(year).await }
            },
        );

        let (from, to) = default_attendance_range(today);
        let attendance_range = create_rw_signal((from, to));
        let attendance_chart_resource = use_query(
            move || {
                let (from, to) = attendance_range.get();
                keys::dashboard_attendance_chart(from, to)
            },
            move |_| {
                let repo = repository.get_value();
                let (from, to) = attendance_range.get_untracked();
                async move { repo.attendance_chart(from, to).await }
            },
        );

        let activity_action = create_action(move |code: &String| {
            let repo = repository.get_value();
            let code = code.clone();
            async move { repo.employee_activity(&code).await }
        });
        let activity_error = create_rw_signal(None);
        create_effect(move |_| {
            if let Some(Err(err)) = activity_action.value().get() {
                toasts.api_error(&err);
                activity_error.set(Some(err));
            }
        });

        Self {
            counts_resource,
            chart_year,
            leave_chart_resource,
            attendance_from: create_rw_signal(from.format("%Y-%m-%d").to_string()),
            attendance_to: create_rw_signal(to.format("%Y-%m-%d").to_string()),
            attendance_range,
            attendance_range_error: create_rw_signal(None),
            attendance_chart_resource,
            activity_code: create_rw_signal(String::new()),
            activity_error,
            activity_action,
        }
    }

    /// Applies the typed range; an invalid range keeps the chart on the previous one.
    pub fn apply_attendance_range(&self) {
        match parse_date_range(
            &self.attendance_from.get_untracked(),
            &self.attendance_to.get_untracked(),
        ) {
            Ok(range) => {
                self.attendance_range_error.set(None);
                self.attendance_range.set(range);
            }
            Err(err) => self.attendance_range_error.set(Some(err)),
        }
    }

    pub fn lookup_activity(&self) {
        if self.activity_action.pending().get_untracked() {
            return;
        }
        match validate_employee_code(&self.activity_code.get_untracked()) {
            Ok(code) => {
                self.activity_error.set(None);
                self.activity_action.dispatch(code);
            }
            Err(err) => self.activity_error.set(Some(err)),
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::date;
    use crate::test_support::ssr::with_runtime_without_resources;

    #[test]
    fn inverted_range_is_rejected_and_previous_range_kept() {
        with_runtime_without_resources(|| {
            let vm = DashboardViewModel::new();
            let before = vm.attendance_range.get();
            vm.attendance_from.set("2025-03-10".into());
            vm.attendance_to.set("2025-03-01".into());

            vm.apply_attendance_range();

            assert!(vm.attendance_range_error.get().is_some_and(|e| e.is_validation()));
            assert_eq!(vm.attendance_range.get(), before);
        });
    }

    #[test]
    fn valid_range_replaces_chart_window() {
        with_runtime_without_resources(|| {
            let vm = DashboardViewModel::new();
            vm.attendance_from.set("2025-03-01".into());
            vm.attendance_to.set("2025-03-31".into());

            vm.apply_attendance_range();

            assert_eq!(vm.attendance_range_error.get(), None);
            assert_eq!(vm.attendance_range.get(), (date(2025, 3, 1), date(2025, 3, 31)));
        });
    }

    #[test]
    fn blank_lookup_is_not_sent() {
        with_runtime_without_resources(|| {
            let vm = DashboardViewModel::new();
            vm.activity_code.set("  ".into());

            vm.lookup_activity();

            assert!(vm.activity_error.get().is_some_and(|e| e.is_validation()));
            assert_eq!(vm.activity_action.version().get(), 0);
            assert!(vm.activity_action.input().get().is_none());
        });
    }
}
