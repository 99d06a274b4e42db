use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, TimeAllocation},
};

impl ApiClient {
    pub async fn get_time_allocation(&self) -> Result<TimeAllocation, ApiError> {
        self.post_json("TimeAllocation/get", &json!({}))
            .await?
            .into_data()
    }

    pub async fn save_time_allocation(
        &self,
        allocation: &TimeAllocation,
    ) -> Result<Option<String>, ApiError> {
        self.post_json("TimeAllocation/add-or-modify", allocation)
            .await?
            .into_message()
    }
}
