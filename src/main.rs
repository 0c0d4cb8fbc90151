//! Archive Recycle Bin Frontend Entry Point

mod actions;
mod api;
mod app;
mod batch;
mod columns;
mod components;
mod config;
mod context;
mod i18n;
mod logging;
mod models;
mod notify;
mod preview;
mod query;
mod sanitize;
mod selection;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    logging::init(config.log_level());
    log::info!(target: "app", "recycle bin using API at {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
