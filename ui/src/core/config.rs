//! Dashboard configuration.
//!
//! The backend location can be injected by whoever serves the page, so the
//! same build works against staging and production:
//!
//! ```html
//! <meta name="nmrih:api-url" content="https://log-parser.example.org">
//! ```
//!
//! or
//!
//! ```javascript
//! window.__NMRIH_CONFIG__ = { api_url: "https://log-parser.example.org" };
//! ```

/// Backend used when the page does not inject one.
pub const DEFAULT_API_URL: &str = "https://log-parser.rulat-bot.duckdns.org";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Base URL of the log-parsing backend, without a trailing slash.
    pub api_url: String,
    /// Build/version marker injected by the server, shown in the footer.
    pub version: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }
}

impl DashboardConfig {
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            version: None,
        }
    }

    /// Resolve configuration for the running page (priority order):
    /// 1. `<meta name="nmrih:api-url">` / `<meta name="nmrih:version">`
    /// 2. `window.__NMRIH_CONFIG__.api_url`
    /// 3. [`DEFAULT_API_URL`]
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(url) = injected::meta_content("nmrih:api-url")
            .or_else(|| injected::js_config("api_url"))
            .filter(|url| !url.trim().is_empty())
        {
            config = Self::with_api_url(url);
        }
        config.version = injected::meta_content("nmrih:version").filter(|v| !v.is_empty());

        config
    }

    /// Join `path` onto the base URL with exactly one separating slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

#[cfg(target_arch = "wasm32")]
mod injected {
    use wasm_bindgen::JsCast;

    pub(super) fn meta_content(name: &str) -> Option<String> {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{name}\"]");
        document
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| meta.content())
    }

    pub(super) fn js_config(key: &str) -> Option<String> {
        let window = web_sys::window()?;
        let config = js_sys::Reflect::get(&window, &"__NMRIH_CONFIG__".into()).ok()?;
        if config.is_undefined() || config.is_null() {
            return None;
        }
        js_sys::Reflect::get(&config, &key.into()).ok()?.as_string()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod injected {
    pub(super) fn meta_content(_name: &str) -> Option<String> {
        None
    }

    pub(super) fn js_config(_key: &str) -> Option<String> {
        None
    }
}
