//! Table Columns
//!
//! Column set of the recycle table and the persisted visibility preference.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::i18n::Msg;

/// localStorage key of the column preference
pub const PERSISTENCE_KEY: &str = "archive-recycle-table";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Id,
    Title,
    Thumb,
    ModuleName,
    Actions,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Id,
        Column::Title,
        Column::Thumb,
        Column::ModuleName,
        Column::Actions,
    ];

    /// Header label; `None` for the untranslated ID header
    pub fn label(self) -> Option<Msg> {
        match self {
            Column::Id => None,
            Column::Title => Some(Msg::TitleName),
            Column::Thumb => Some(Msg::Thumb),
            Column::ModuleName => Some(Msg::ModuleName),
            Column::Actions => Some(Msg::Action),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct ColumnState {
    show: bool,
}

/// Per-column visibility; columns absent from the map are shown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnVisibility {
    columns: BTreeMap<Column, ColumnState>,
}

impl ColumnVisibility {
    pub fn is_visible(&self, column: Column) -> bool {
        self.columns.get(&column).map(|s| s.show).unwrap_or(true)
    }

    pub fn toggle(&mut self, column: Column) {
        let show = !self.is_visible(column);
        self.columns.insert(column, ColumnState { show });
    }

    pub fn visible(&self) -> Vec<Column> {
        Column::ALL.into_iter().filter(|c| self.is_visible(*c)).collect()
    }

    /// Load from `store`, falling back to all-visible on missing or bad data
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let Some(raw) = store.get(PERSISTENCE_KEY) else {
            return Self::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!(target: "columns", "ignoring stored column state: {}", e);
            Self::default()
        })
    }

    pub fn save(&self, store: &dyn PreferenceStore) {
        match serde_json::to_string(self) {
            Ok(raw) => store.set(PERSISTENCE_KEY, &raw),
            Err(e) => log::error!(target: "columns", "failed to encode column state: {}", e),
        }
    }
}

// ========================
// Preference Storage
// ========================

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`; all operations are no-ops when unavailable
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!(target: "columns", "localStorage rejected {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                log::warn!(target: "columns", "localStorage refused to remove {}", key);
            }
        }
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<BTreeMap<String, String>>,
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
