//! Frontend Models
//!
//! Data structures matching the content API payloads.

use serde::{Deserialize, Serialize};

pub type ArchiveId = u64;

/// Recycled archive as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archive {
    pub id: ArchiveId,
    pub title: String,
    /// Thumbnail URL, empty when the archive has none
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub module_name: String,
    #[serde(default)]
    pub category_title: String,
}

impl Archive {
    pub fn has_thumb(&self) -> bool {
        !self.thumb.trim().is_empty()
    }
}

/// Body of an archive detail
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArchiveData {
    #[serde(default)]
    pub content: String,
}

/// Full archive record from the detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveDetail {
    #[serde(flatten)]
    pub archive: Archive,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub data: Option<ArchiveData>,
}

impl ArchiveDetail {
    /// Raw (unsanitized) content markup, empty if the detail carries no body
    pub fn content(&self) -> &str {
        self.data.as_ref().map(|d| d.content.as_str()).unwrap_or("")
    }
}

/// One page of recycled archives
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArchivePage {
    pub rows: Vec<Archive>,
    pub total: u64,
}

/// Response envelope shared by every endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
    #[serde(default)]
    pub total: u64,
}
