use wasm_bindgen::prelude::wasm_bindgen;

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
mod test_support;
pub mod utils;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger was already initialised".into());
    }
    log::info!("Starting HRMS frontend (wasm)");

    // window.__HRMS_ENV (env.js) takes precedence over ./config.json.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
