//! Recycle Bin App
//!
//! Root component: provides the app context and lays out the page.

use leptos::prelude::*;

use crate::components::{RecyclePage, ToastHost};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    let locale = ctx.locale;
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <span class="app-title">"CMS"</span>
                <button
                    class="locale-switch"
                    on:click=move |_| locale.update(|l| *l = l.toggled())
                >
                    {move || locale.get().switch_label()}
                </button>
            </header>
            <main class="main-content">
                <RecyclePage />
            </main>
            <ToastHost />
        </div>
    }
}
