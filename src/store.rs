//! Recycle Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::batch::{BatchAction, BatchOutcome, PendingAction};
use crate::columns::{Column, ColumnVisibility, PreferenceStore, PERSISTENCE_KEY};
use crate::models::{Archive, ArchiveId, ArchivePage};
use crate::preview::PreviewState;
use crate::query::ListQuery;
use crate::selection::Selection;

/// Recycle page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct RecycleState {
    /// Rows of the current page
    pub rows: Vec<Archive>,
    /// Total recycled archives on the server
    pub total: u64,
    /// A list request is in flight
    pub loading: bool,
    pub query: ListQuery,
    pub selection: Selection,
    pub preview: PreviewState,
    /// Batch action waiting in the confirm dialog
    pub pending: Option<PendingAction>,
    /// The pending action was confirmed and its calls are in flight
    pub running: bool,
    pub columns: ColumnVisibility,
    /// Version counter, increment to reload the current query
    pub reload_version: u32,
}

impl RecycleState {
    pub fn new(page_size: u32, columns: ColumnVisibility) -> Self {
        Self {
            query: ListQuery::new(page_size),
            columns,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type RecycleStore = Store<RecycleState>;

/// Get the recycle store from context
pub fn use_recycle_store() -> RecycleStore {
    expect_context::<RecycleStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the rows with a freshly loaded page
pub fn store_apply_page(store: &RecycleStore, page: ArchivePage) {
    store.selection().write().retain_visible(&page.rows);
    *store.total().write() = page.total;
    *store.rows().write() = page.rows;
}

/// Ask for confirmation of `action` over `ids`; ignored while a batch runs
pub fn store_request_action(store: &RecycleStore, action: BatchAction, ids: Vec<ArchiveId>) {
    if store.running().get_untracked() {
        log::debug!(target: "page", "ignoring {:?} request while a batch runs", action);
        return;
    }
    *store.pending().write() = Some(PendingAction { action, ids });
}

/// Take the pending action out of the confirm dialog (cancel)
///
/// Returns `None` while the confirmed action is running.
pub fn store_take_pending(store: &RecycleStore) -> Option<PendingAction> {
    if store.running().get_untracked() {
        return None;
    }
    store.pending().write().take()
}

/// Mark the pending action as running and hand out a copy of it.
///
/// The dialog stays open until [`store_finish_batch`].
pub fn store_begin_batch(store: &RecycleStore) -> Option<PendingAction> {
    if store.running().get_untracked() {
        return None;
    }
    let pending = store.pending().get_untracked()?;
    *store.running().write() = true;
    Some(pending)
}

/// After a batch: close the dialog; on success also clear the selection
/// and reload from page 1
pub fn store_finish_batch(store: &RecycleStore, outcome: &BatchOutcome) {
    *store.running().write() = false;
    *store.pending().write() = None;
    if !outcome.should_reset() {
        return;
    }
    store.selection().write().clear();
    store.query().write().reset_page();
    *store.reload_version().write() += 1;
}

/// Clear the selection (toolbar "cancel")
pub fn store_clear_selection(store: &RecycleStore) {
    store.selection().write().clear();
}

/// Flip one column and persist the whole preference
pub fn store_toggle_column(store: &RecycleStore, column: Column, prefs: &dyn PreferenceStore) {
    store.columns().update(|columns| {
        columns.toggle(column);
        columns.save(prefs);
    });
}

/// Show every column again and forget the stored preference
pub fn store_reset_columns(store: &RecycleStore, prefs: &dyn PreferenceStore) {
    *store.columns().write() = ColumnVisibility::default();
    prefs.remove(PERSISTENCE_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::testing::archive;
    use crate::columns::MemoryStore;

    fn with_store(f: impl FnOnce(RecycleStore)) {
        let owner = Owner::new();
        owner.with(|| f(Store::new(RecycleState::new(10, ColumnVisibility::default()))));
    }

    fn select(store: &RecycleStore, ids: &[ArchiveId]) {
        for &id in ids {
            store.selection().write().toggle(id);
        }
    }

    #[test]
    fn test_success_clears_selection_and_resets_page() {
        with_store(|store| {
            store_apply_page(&store, ArchivePage { rows: vec![archive(1), archive(2), archive(3)], total: 33 });
            select(&store, &[1, 2, 3]);
            store.query().write().current = 3;

            store_finish_batch(&store, &BatchOutcome::Completed { count: 3 });

            assert!(store.selection().get_untracked().is_empty());
            assert_eq!(store.query().get_untracked().current, 1);
            assert_eq!(store.reload_version().get_untracked(), 1);
        });
    }

    #[test]
    fn test_abort_keeps_selection() {
        with_store(|store| {
            store_apply_page(&store, ArchivePage { rows: vec![archive(1), archive(2), archive(3)], total: 3 });
            select(&store, &[1, 2, 3]);
            store.query().write().current = 2;

            store_finish_batch(&store, &BatchOutcome::Aborted { completed: 1, failed_id: 2 });

            assert_eq!(store.selection().get_untracked().ids(), &[1, 2, 3]);
            assert_eq!(store.query().get_untracked().current, 2);
            assert_eq!(store.reload_version().get_untracked(), 0);
        });
    }

    #[test]
    fn test_skipped_leaves_state_unchanged() {
        with_store(|store| {
            store_apply_page(&store, ArchivePage { rows: vec![archive(1)], total: 1 });
            select(&store, &[1]);

            store_finish_batch(&store, &BatchOutcome::Skipped);

            assert_eq!(store.rows().get_untracked(), vec![archive(1)]);
            assert_eq!(store.selection().get_untracked().ids(), &[1]);
            assert_eq!(store.query().get_untracked(), ListQuery::new(10));
            assert_eq!(store.reload_version().get_untracked(), 0);
        });
    }

    #[test]
    fn test_pending_round_trip() {
        with_store(|store| {
            store_request_action(&store, BatchAction::Delete, vec![4, 5]);
            let pending = store_take_pending(&store).unwrap();
            assert_eq!(pending.action, BatchAction::Delete);
            assert_eq!(pending.ids, vec![4, 5]);
            assert!(store_take_pending(&store).is_none());
        });
    }

    #[test]
    fn test_apply_page_drops_hidden_selection() {
        with_store(|store| {
            select(&store, &[1, 7]);
            store_apply_page(&store, ArchivePage { rows: vec![archive(1), archive(2)], total: 2 });
            assert_eq!(store.selection().get_untracked().ids(), &[1]);
            assert_eq!(store.total().get_untracked(), 2);
        });
    }

    #[test]
    fn test_request_ignored_while_running() {
        with_store(|store| {
            store_request_action(&store, BatchAction::Delete, vec![1, 2, 3]);
            let running = store_begin_batch(&store).unwrap();
            assert_eq!(running.ids, vec![1, 2, 3]);
            assert!(store.running().get_untracked());

            // dialog stays up and cannot be cancelled or confirmed twice
            assert!(store_take_pending(&store).is_none());
            assert!(store_begin_batch(&store).is_none());
            assert_eq!(store.pending().get_untracked(), Some(running));

            store_finish_batch(&store, &BatchOutcome::Completed { count: 3 });
            assert!(!store.running().get_untracked());
            assert!(store.pending().get_untracked().is_none());

            *store.running().write() = true;
            store_request_action(&store, BatchAction::Recover, vec![4]);
            assert!(store.pending().get_untracked().is_none());
        });
    }

    #[test]
    fn test_abort_closes_dialog_and_allows_retry() {
        with_store(|store| {
            store_request_action(&store, BatchAction::Recover, vec![1, 2]);
            store_begin_batch(&store).unwrap();
            store_finish_batch(&store, &BatchOutcome::Aborted { completed: 1, failed_id: 2 });

            assert!(!store.running().get_untracked());
            assert!(store.pending().get_untracked().is_none());
            store_request_action(&store, BatchAction::Recover, vec![2]);
            assert_eq!(store.pending().get_untracked().map(|p| p.ids), Some(vec![2]));
        });
    }

    #[test]
    fn test_toggle_column_persists() {
        with_store(|store| {
            let prefs = MemoryStore::default();
            store_toggle_column(&store, Column::Thumb, &prefs);

            assert!(!store.columns().with_untracked(|c| c.is_visible(Column::Thumb)));
            assert_eq!(ColumnVisibility::load(&prefs), store.columns().get_untracked());

            store_reset_columns(&store, &prefs);
            assert!(store.columns().with_untracked(|c| c.is_visible(Column::Thumb)));
            assert!(prefs.get(PERSISTENCE_KEY).is_none());
        });
    }
}
