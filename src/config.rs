//! Runtime Configuration
//!
//! Read once at startup from the optional `window.__RECYCLE_CONFIG__`
//! object the hosting page may define. Every field has a default.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::i18n::Locale;

const GLOBAL_KEY: &str = "__RECYCLE_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Base URL of the content API, without trailing slash
    pub api_base: String,
    /// Value sent in the `admin` header, if any
    pub admin_token: Option<String>,
    pub default_page_size: u32,
    pub locale: Locale,
    /// `log` level filter name (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            admin_token: None,
            default_page_size: 20,
            locale: Locale::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from the page global, falling back to defaults
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_KEY)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return Self::default(),
        };
        match serde_wasm_bindgen::from_value(raw) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(&format!("[config] invalid {}: {}", GLOBAL_KEY, e).into());
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = AppConfig::from_json(r#"{"apiBase":"https://cms.example.com/api"}"#).unwrap();
        assert_eq!(config.api_base, "https://cms.example.com/api");
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.locale, Locale::En);
        assert!(config.admin_token.is_none());
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "apiBase": "/cms",
            "adminToken": "secret",
            "defaultPageSize": 50,
            "locale": "zh-CN",
            "logLevel": "debug"
        }"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.admin_token.as_deref(), Some("secret"));
        assert_eq!(config.locale, Locale::ZhCn);
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
