use reqwest::{multipart::Form, Client, RequestBuilder, Response};
use serde::Serialize;

use super::envelope::{http_failure, Envelope};
use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    async fn endpoint(&self, path: &str) -> String {
        let base_url = self.resolved_base_url().await;
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// POSTs a JSON body and hands back the decoded envelope.
    pub(crate) async fn post_json<B>(&self, path: &str, body: &B) -> Result<Envelope, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path).await;
        let request = self.http_client().post(&url).json(body);
        let response = self.execute(request).await.inspect_err(|err| {
            log::error!("POST {} failed: {}", path, err);
        })?;
        Self::read_envelope(path, response).await
    }

    pub(crate) async fn post_multipart(&self, path: &str, form: Form) -> Result<Envelope, ApiError> {
        let url = self.endpoint(path).await;
        let request = self.http_client().post(&url).multipart(form);
        let response = self.execute(request).await.inspect_err(|err| {
            log::error!("POST {} (multipart) failed: {}", path, err);
        })?;
        Self::read_envelope(path, response).await
    }

    async fn read_envelope(path: &str, response: Response) -> Result<Envelope, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        if !status.is_success() {
            let err = http_failure(status.as_u16(), &body);
            log::warn!("POST {} returned {}: {}", path, status, err);
            return Err(err);
        }
        serde_json::from_str::<Envelope>(&body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        mock_transport::dispatch(&request)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};
