//! Recycle Page Component
//!
//! Page container: owns the store, loads the list and hosts the dialogs.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::{load_page, run_pending};
use crate::batch::PendingAction;
use crate::columns::{ColumnVisibility, LocalStorage};
use crate::components::{ArchiveTable, BatchToolbar, ColumnSettings, ConfirmDialog, PaginationBar, PreviewModal};
use crate::context::use_app_context;
use crate::i18n::Msg;
use crate::store::{RecycleState, RecycleStateStoreFields};

#[component]
pub fn RecyclePage() -> impl IntoView {
    let ctx = use_app_context();
    let columns = ColumnVisibility::load(&LocalStorage);
    let store = Store::new(RecycleState::new(ctx.config.default_page_size, columns));
    provide_context(store);

    let latest = StoredValue::new(0u32);

    // Reload when the query changes or a reload is requested
    Effect::new({
        let ctx = ctx.clone();
        move |_| {
            store.query().track();
            store.reload_version().track();
            load_page(&ctx, store, latest);
        }
    });

    let on_confirm = {
        let ctx = ctx.clone();
        Callback::new(move |pending: PendingAction| run_pending(&ctx, store, pending))
    };

    let reload = move |_| *store.reload_version().write() += 1;

    view! {
        <div class="page-container">
            <div class="table-header">
                <h2 class="table-title">{let ctx = ctx.clone(); move || ctx.t(Msg::RecycleName)}</h2>
                <div class="table-tools">
                    <button class="btn btn-small" title="Reload" on:click=reload>"⟳"</button>
                    <ColumnSettings />
                </div>
            </div>
            <BatchToolbar />
            <ArchiveTable />
            <PaginationBar />
            <PreviewModal />
            <ConfirmDialog on_confirm=on_confirm />
        </div>
    }
}
