//! Page Actions
//!
//! Async glue between the views, the content API and the store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ArchiveApi;
use crate::batch::{run_batch, PendingAction};
use crate::context::AppContext;
use crate::i18n::{t, Msg};
use crate::models::Archive;
use crate::notify::Notifier;
use crate::store::{store_apply_page, store_finish_batch, RecycleStore, RecycleStateStoreFields};

/// Fetch the page described by the store's query.
///
/// `latest` counts started requests; a response is only applied if no
/// newer request was started in the meantime.
pub fn load_page(ctx: &AppContext, store: RecycleStore, latest: StoredValue<u32>) {
    let params = store.query().get_untracked().params();
    latest.update_value(|n| *n = n.wrapping_add(1));
    let seq = latest.get_value();

    let api = ctx.api.clone();
    let notifier = ctx.notifier;
    let locale = ctx.locale.get_untracked();
    *store.loading().write() = true;

    spawn_local(async move {
        let result = api.list_archives(&params).await;
        if latest.get_value() != seq {
            return;
        }
        match result {
            Ok(page) => {
                log::debug!(target: "page", "loaded {} of {} recycled archives", page.rows.len(), page.total);
                store_apply_page(&store, page);
            }
            Err(e) => {
                log::error!(target: "page", "list page {} failed: {}", params.current, e);
                notifier.error(t(locale, Msg::ListFailure));
            }
        }
        *store.loading().write() = false;
    });
}

/// Show `row` in the preview modal and fetch its full detail
pub fn open_preview(ctx: &AppContext, store: RecycleStore, row: Archive) {
    let ticket = store.preview().write().open(row);
    let api = ctx.api.clone();
    spawn_local(async move {
        let result = api.archive_info(ticket.id).await;
        store.preview().write().resolve(ticket, result);
    });
}

/// Run a confirmed batch action; the store leaves its running state in
/// `store_finish_batch`
pub fn run_pending(ctx: &AppContext, store: RecycleStore, pending: PendingAction) {
    let api = ctx.api.clone();
    let notifier = ctx.notifier;
    let locale = ctx.locale.get_untracked();
    spawn_local(async move {
        let outcome = run_batch(&api, &notifier, locale, pending.action, &pending.ids).await;
        store_finish_batch(&store, &outcome);
    });
}
