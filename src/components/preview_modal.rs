//! Preview Modal Component
//!
//! Read-only archive preview. The body is sanitized before injection.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::i18n::Msg;
use crate::store::{use_recycle_store, RecycleStateStoreFields};

#[component]
pub fn PreviewModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_recycle_store();

    // OK and Cancel both just hide the modal
    let close = move |_: web_sys::MouseEvent| store.preview().write().close();

    let loading_label = {
        let ctx = ctx.clone();
        move || ctx.t(Msg::Loading)
    };

    view! {
        <Show when=move || store.preview().with(|p| p.is_visible())>
            <div class="modal-mask" on:click=close>
                <div class="modal preview-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <span class="modal-title">{let ctx = ctx.clone(); move || ctx.t(Msg::Preview)}</span>
                        <button class="modal-close" on:click=close>"×"</button>
                    </div>
                    <div class="modal-body">
                        <h3>{move || store.preview().with(|p| p.title())}</h3>
                        <div class="preview-meta">{move || store.preview().with(|p| p.meta())}</div>
                        <p class="preview-description">{move || store.preview().with(|p| p.description())}</p>
                        {let loading_label = loading_label.clone(); view! {
                            <Show when=move || store.preview().with(|p| p.is_loading())>
                                <div class="loading">{loading_label.clone()}</div>
                            </Show>
                        }}
                        <div class="article-content" inner_html=move || store.preview().with(|p| p.body_html())></div>
                    </div>
                    <div class="modal-footer">
                        <button class="btn" on:click=close>{let ctx = ctx.clone(); move || ctx.t(Msg::Cancel)}</button>
                        <button class="btn btn-primary" on:click=close>{let ctx = ctx.clone(); move || ctx.t(Msg::Ok)}</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
