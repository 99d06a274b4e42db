use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, Employee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.post_json("Employee/list", &json!({}))
            .await?
            .into_data()
    }
}
