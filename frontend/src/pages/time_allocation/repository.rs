use std::rc::Rc;

use crate::api::{ApiClient, ApiError, TimeAllocation};

#[derive(Clone)]
pub struct TimeAllocationRepository {
    client: Rc<ApiClient>,
}

impl TimeAllocationRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load(&self) -> Result<TimeAllocation, ApiError> {
        self.client.get_time_allocation().await
    }

    pub async fn save(&self, allocation: TimeAllocation) -> Result<Option<String>, ApiError> {
        self.client.save_time_allocation(&allocation).await
    }
}
