use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
}

impl RuntimeConfig {
    fn base_url(self) -> Option<String> {
        self.api_base_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
    }
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn read_global(name: &str) -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        let url = ["api_base_url", "API_BASE_URL"].iter().find_map(|key| {
            js_sys::Reflect::get(&obj, &JsValue::from_str(key))
                .ok()
                .and_then(|v| v.as_string())
        });
        Some(RuntimeConfig { api_base_url: url })
    }

    /// `window.__HRMS_ENV` (env.js) wins over `window.__HRMS_CONFIG`.
    pub fn snapshot() -> Option<String> {
        read_global("__HRMS_ENV")
            .and_then(RuntimeConfig::base_url)
            .or_else(|| read_global("__HRMS_CONFIG").and_then(RuntimeConfig::base_url))
    }

    pub fn publish(url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&obj, &"api_base_url".into(), &JsValue::from_str(url));
        let _ = js_sys::Reflect::set(&window, &"__HRMS_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let url = format!("{}/config.json", origin.trim_end_matches('/'));
        let resp = reqwest::get(&url).await.ok()?;
        if !resp.status().is_success() {
            log::debug!("config.json not served ({})", resp.status());
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod globals {
    use super::RuntimeConfig;

    pub fn snapshot() -> Option<String> {
        std::env::var("HRMS_API_BASE_URL")
            .ok()
            .and_then(|url| RuntimeConfig {
                api_base_url: Some(url),
            }
            .base_url())
    }

    pub fn publish(_url: &str) {}

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        None
    }
}

fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = globals::snapshot() {
        return cache_base_url(existing);
    }
    if let Some(url) = globals::fetch_runtime_config()
        .await
        .and_then(RuntimeConfig::base_url)
    {
        globals::publish(&url);
        return cache_base_url(url);
    }
    log::info!("No runtime config found, using {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL.to_string())
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL resolved to {}", url);
}
