use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{DashboardPage, EmployeesPage, LeavesPage, ReportsPage, TimeAllocationPage},
    state::{query::QueryCache, toast::Toasts},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/dashboard",
    "/leaves",
    "/employees",
    "/reports",
    "/time-allocation",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_context(QueryCache::new());
    provide_context(Toasts::new());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/dashboard" view=DashboardPage/>
                <Route path="/leaves" view=LeavesPage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/reports" view=ReportsPage/>
                <Route path="/time-allocation" view=TimeAllocationPage/>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::NAV_LINKS;
    use std::collections::HashSet;

    #[test]
    fn every_nav_link_has_a_route() {
        for (href, _) in NAV_LINKS {
            assert!(ROUTE_PATHS.contains(href), "no route for {}", href);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
