//! Confirm Dialog Component
//!
//! Modal confirmation for a pending recover/delete. Cancel drops the
//! pending action; OK hands it to `on_confirm` and the dialog stays open,
//! buttons disabled, until the run finishes.

use leptos::prelude::*;

use crate::batch::PendingAction;
use crate::context::use_app_context;
use crate::i18n::Msg;
use crate::store::{store_begin_batch, store_take_pending, use_recycle_store, RecycleStateStoreFields};

/// Confirmation dialog bound to the store's pending action
///
/// # Arguments
/// * `on_confirm` - Callback receiving the confirmed action
#[component]
pub fn ConfirmDialog(#[prop(into)] on_confirm: Callback<PendingAction>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_recycle_store();

    let title = {
        let ctx = ctx.clone();
        move || {
            store
                .pending()
                .with(|p| p.as_ref().map(|p| p.action.confirm_msg()))
                .map(|msg| ctx.t(msg))
                .unwrap_or("")
        }
    };

    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if let Some(pending) = store_begin_batch(&store) {
            on_confirm.run(pending);
        }
    };

    let cancel = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        store_take_pending(&store);
    };

    let running = move || store.running().get();

    view! {
        <Show when=move || store.pending().with(|p| p.is_some())>
            <div class="modal-mask">
                <div class="modal confirm-modal">
                    <div class="modal-body confirm-title">
                        <span class="confirm-icon">"!"</span>
                        {title.clone()}
                    </div>
                    <div class="modal-footer">
                        <button class="btn" prop:disabled=running on:click=cancel>
                            {let ctx = ctx.clone(); move || ctx.t(Msg::Cancel)}
                        </button>
                        <button class="btn btn-primary" class:loading=running prop:disabled=running on:click=confirm>
                            {let ctx = ctx.clone(); move || ctx.t(Msg::Ok)}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
