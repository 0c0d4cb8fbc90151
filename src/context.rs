//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpArchiveApi;
use crate::config::AppConfig;
use crate::i18n::{self, Locale, Msg};
use crate::notify::ToastNotifier;

/// App-wide services and settings
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    /// Content API client
    pub api: HttpArchiveApi,
    /// Toast-backed notifier rendered by `ToastHost`
    pub notifier: ToastNotifier,
    /// Current UI language
    pub locale: RwSignal<Locale>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            api: HttpArchiveApi::new(&config),
            notifier: ToastNotifier::new(),
            locale: RwSignal::new(config.locale),
            config,
        }
    }

    /// Translate `msg` in the current locale (tracked)
    pub fn t(&self, msg: Msg) -> &'static str {
        i18n::t(self.locale.get(), msg)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
