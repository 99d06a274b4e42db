use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use super::types::ApiError;

pub const FALLBACK_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Business-level status carried inside a 2xx body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BusinessStatus {
    Flag(bool),
    Text(String),
}

impl Default for BusinessStatus {
    fn default() -> Self {
        BusinessStatus::Text(String::new())
    }
}

impl BusinessStatus {
    pub fn is_success(&self) -> bool {
        match self {
            BusinessStatus::Flag(flag) => *flag,
            BusinessStatus::Text(text) => text.trim().eq_ignore_ascii_case("success"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: BusinessStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    pub fn failure_message(&self) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
            .unwrap_or(FALLBACK_FAILURE_MESSAGE)
            .to_string()
    }

    pub fn into_result(self) -> Result<Value, ApiError> {
        if self.status.is_success() {
            Ok(self.data)
        } else {
            Err(ApiError::business(self.failure_message()))
        }
    }

    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let data = self.into_result()?;
        serde_json::from_value(data)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    /// Success message from the server, for mutations that only acknowledge.
    pub fn into_message(self) -> Result<Option<String>, ApiError> {
        let message = self.message.clone();
        self.into_result().map(|_| message)
    }
}

/// Decodes an error body of a non-2xx response, falling back to the status text.
pub fn http_failure(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<Envelope>(body)
        .ok()
        .and_then(|env| env.message)
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status {}", status));
    ApiError::http(status, message)
}
