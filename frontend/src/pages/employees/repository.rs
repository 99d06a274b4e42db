use std::rc::Rc;

use crate::api::{ApiClient, ApiError, Employee};

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }
}
