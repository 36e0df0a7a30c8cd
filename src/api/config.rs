#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_BASE_URL: &str = "http://127.0.0.1:5000/api";
#[cfg(target_arch = "wasm32")]
const DEFAULT_WEB_BASE_URL: &str = "http://127.0.0.1:5000/api";

pub const BASE_URL_ENV: &str = "ROADMAP_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url).unwrap_or_default(),
        }
    }

    /// Resolves the backend URL for the current platform.
    pub fn from_environment() -> Self {
        let base_url = default_base_url();
        log::info!("Using roadmap API at {base_url}");
        Self { base_url }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_environment()
    }
}

fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let trimmed = trimmed.trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_base_url() -> String {
    std::env::var(BASE_URL_ENV)
        .ok()
        .as_deref()
        .and_then(normalize_base_url)
        .unwrap_or_else(|| DEFAULT_NATIVE_BASE_URL.to_string())
}

#[cfg(target_arch = "wasm32")]
fn default_base_url() -> String {
    base_url_from_build_env()
        .or_else(base_url_from_querystring)
        .or_else(base_url_from_meta)
        .or_else(base_url_from_local_storage)
        .unwrap_or_else(|| DEFAULT_WEB_BASE_URL.to_string())
}

#[cfg(target_arch = "wasm32")]
fn base_url_from_build_env() -> Option<String> {
    option_env!("ROADMAP_API_URL").and_then(normalize_base_url)
}

#[cfg(target_arch = "wasm32")]
fn base_url_from_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "api_url" {
            let decoded = js_sys::decode_uri_component(value).ok()?;
            let decoded = decoded.as_string()?;
            return normalize_base_url(&decoded);
        }
    }

    None
}

#[cfg(target_arch = "wasm32")]
fn base_url_from_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name='roadmap-api-url']")
        .ok()??;

    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize_base_url)
}

#[cfg(target_arch = "wasm32")]
fn base_url_from_local_storage() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item("roadmap_api_url")
        .ok()?
        .as_deref()
        .and_then(normalize_base_url)
}
