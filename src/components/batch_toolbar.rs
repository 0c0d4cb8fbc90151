//! Batch Toolbar Component
//!
//! Shown while rows are selected: recover, delete or clear the selection.

use leptos::prelude::*;

use crate::batch::BatchAction;
use crate::context::use_app_context;
use crate::i18n::Msg;
use crate::store::{store_clear_selection, store_request_action, use_recycle_store, RecycleStateStoreFields};

#[component]
pub fn BatchToolbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_recycle_store();

    let request = move |action: BatchAction| {
        let ids = store.selection().with_untracked(|s| s.ids().to_vec());
        store_request_action(&store, action, ids);
    };

    let running = move || store.running().get();

    view! {
        <Show when=move || store.selection().with(|s| !s.is_empty())>
            <div class="batch-toolbar">
                <span class="batch-count">
                    {move || store.selection().with(|s| s.len())} " " {let ctx = ctx.clone(); move || ctx.t(Msg::Selected)}
                </span>
                <button class="btn btn-small" prop:disabled=running on:click=move |_| request(BatchAction::Recover)>
                    {let ctx = ctx.clone(); move || ctx.t(Msg::BatchRecover)}
                </button>
                <button class="btn btn-small" prop:disabled=running on:click=move |_| request(BatchAction::Delete)>
                    {let ctx = ctx.clone(); move || ctx.t(Msg::BatchDelete)}
                </button>
                <button class="btn btn-link btn-small" prop:disabled=running on:click=move |_| store_clear_selection(&store)>
                    {let ctx = ctx.clone(); move || ctx.t(Msg::CancelSelect)}
                </button>
            </div>
        </Show>
    }
}
