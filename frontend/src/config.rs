use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

fn string_field(obj: &js_sys::Object, key: &str) -> Option<String> {
    js_sys::Reflect::get(obj, &key.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn global_object(name: &str) -> Option<js_sys::Object> {
    let w = window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    Some(js_sys::Object::from(any))
}

// Expect optional global: window.__LEAVEDESK_ENV = { API_BASE_URL: "..." }
fn get_from_env_js() -> Option<String> {
    let obj = global_object("__LEAVEDESK_ENV")?;
    string_field(&obj, "API_BASE_URL").or_else(|| string_field(&obj, "api_base_url"))
}

// Expect optional global: window.__LEAVEDESK_CONFIG = { api_base_url: "..." }
fn get_from_window_config() -> Option<String> {
    let obj = global_object("__LEAVEDESK_CONFIG")?;
    string_field(&obj, "api_base_url").or_else(|| string_field(&obj, "API_BASE_URL"))
}

fn snapshot_from_globals() -> Option<String> {
    get_from_env_js().or_else(get_from_window_config)
}

/// Strips the trailing slash so request paths can always be appended with
/// a leading one.
pub fn normalize_base_url(value: &str) -> String {
    let trimmed = value.trim();
    trimmed.strip_suffix('/').unwrap_or(trimmed).to_string()
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    value
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
