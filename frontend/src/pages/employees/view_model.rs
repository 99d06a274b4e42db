use std::rc::Rc;

use leptos::*;

use crate::api::{ApiClient, ApiError, Employee};
use crate::pages::employees::{
    repository::EmployeesRepository,
    utils::{employee_page, EmployeePage, EmployeeTableState},
};
use crate::state::query::{keys, use_query, QueryResource};

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub table: EmployeeTableState,
    pub employees_resource: QueryResource<Vec<Employee>>,
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(EmployeesRepository::new_with_client(Rc::new(api)));
        let employees_resource = use_query(keys::employees, move |_| {
            let repo = repository.get_value();
            async move { repo.list().await }
        });
        Self {
            table: EmployeeTableState::default(),
            employees_resource,
        }
    }

    pub fn visible(&self) -> Signal<EmployeePage> {
        let resource = self.employees_resource;
        let table = self.table;
        Signal::derive(move || {
            let employees = resource.get().and_then(Result::ok).unwrap_or_default();
            employee_page(&employees, &table.filter.get(), table.sort.get(), table.page.get())
        })
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let resource = self.employees_resource;
        Signal::derive(move || resource.get().and_then(Result::err))
    }
}
