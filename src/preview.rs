//! Preview State
//!
//! The preview modal shows the clicked row at once and swaps in the full
//! detail when it arrives. Each `open` issues a ticket; a detail is only
//! applied if its ticket is still the current one.

use crate::api::ApiResult;
use crate::models::{Archive, ArchiveDetail, ArchiveId};
use crate::sanitize::clean_content;

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewContent {
    /// Row fields only, detail not (yet) loaded
    Partial(Archive),
    Full(ArchiveDetail),
}

impl PreviewContent {
    pub fn archive(&self) -> &Archive {
        match self {
            PreviewContent::Partial(a) => a,
            PreviewContent::Full(d) => &d.archive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket {
    pub id: ArchiveId,
    seq: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewState {
    visible: bool,
    content: Option<PreviewContent>,
    /// Detail request in flight for the current ticket
    fetching: bool,
    seq: u32,
}

impl PreviewState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> Option<&PreviewContent> {
        self.content.as_ref()
    }

    pub fn title(&self) -> String {
        self.content()
            .map(|c| c.archive().title.clone())
            .unwrap_or_default()
    }

    /// Module and category of the previewed archive
    pub fn meta(&self) -> String {
        let Some(content) = self.content() else {
            return String::new();
        };
        let archive = content.archive();
        [archive.module_name.as_str(), archive.category_title.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// Summary from the detail, empty until loaded
    pub fn description(&self) -> String {
        match &self.content {
            Some(PreviewContent::Full(detail)) => detail.description.clone(),
            _ => String::new(),
        }
    }

    /// Sanitized body markup; empty until the detail has loaded
    pub fn body_html(&self) -> String {
        match &self.content {
            Some(PreviewContent::Full(detail)) => clean_content(detail.content()),
            _ => String::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.fetching
    }

    pub fn open(&mut self, row: Archive) -> PreviewTicket {
        self.seq = self.seq.wrapping_add(1);
        let ticket = PreviewTicket {
            id: row.id,
            seq: self.seq,
        };
        self.content = Some(PreviewContent::Partial(row));
        self.fetching = true;
        self.visible = true;
        ticket
    }

    /// Apply a detail fetch result. Returns true if the modal changed.
    ///
    /// A failed fetch leaves the partial row in place.
    pub fn resolve(&mut self, ticket: PreviewTicket, result: ApiResult<ArchiveDetail>) -> bool {
        if ticket.seq != self.seq || !self.visible {
            log::debug!(target: "preview", "dropping stale detail for archive {}", ticket.id);
            return false;
        }
        self.fetching = false;
        match result {
            Ok(detail) => {
                self.content = Some(PreviewContent::Full(detail));
                true
            }
            Err(e) => {
                log::warn!(target: "preview", "detail for archive {} unavailable: {}", ticket.id, e);
                false
            }
        }
    }

    /// Hide the modal and forget its content, whatever the fetch state
    pub fn close(&mut self) {
        self.visible = false;
        self.content = None;
        self.fetching = false;
        self.seq = self.seq.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ArchiveApi;
    use crate::batch::testing::{archive, FakeApi};

    #[tokio::test]
    async fn test_open_shows_row_then_detail() {
        let api = FakeApi::default();
        let mut state = PreviewState::default();

        let ticket = state.open(archive(4));
        assert!(state.is_visible());
        assert!(state.is_loading());
        assert_eq!(state.title(), "Archive 4");
        assert_eq!(state.body_html(), "");

        let applied = state.resolve(ticket, api.archive_info(ticket.id).await);
        assert!(applied);
        assert!(state.is_visible());
        assert!(!state.is_loading());
        assert_eq!(state.body_html(), "<p>content 4</p>");
        assert_eq!(state.meta(), "Article");
    }

    #[tokio::test]
    async fn test_failed_detail_keeps_partial() {
        let api = FakeApi::failing_on(&[4]);
        let mut state = PreviewState::default();

        let ticket = state.open(archive(4));
        assert!(!state.resolve(ticket, api.archive_info(4).await));
        assert!(state.is_visible());
        assert!(!state.is_loading());
        assert_eq!(state.title(), "Archive 4");
        assert_eq!(state.content(), Some(&PreviewContent::Partial(archive(4))));
    }

    #[tokio::test]
    async fn test_close_before_detail_stays_hidden() {
        let api = FakeApi::default();
        let mut state = PreviewState::default();

        let ticket = state.open(archive(1));
        state.close();
        assert!(!state.is_visible());

        assert!(!state.resolve(ticket, api.archive_info(1).await));
        assert!(!state.is_visible());
        assert!(state.content().is_none());
    }

    #[tokio::test]
    async fn test_stale_detail_is_dropped() {
        let api = FakeApi::default();
        let mut state = PreviewState::default();

        let first = state.open(archive(1));
        let second = state.open(archive(2));

        assert!(!state.resolve(first, api.archive_info(1).await));
        assert_eq!(state.title(), "Archive 2");
        assert!(state.resolve(second, api.archive_info(2).await));
        assert_eq!(state.body_html(), "<p>content 2</p>");
    }

    #[test]
    fn test_close_after_detail() {
        let mut state = PreviewState::default();
        state.open(archive(3));
        state.close();
        assert!(!state.is_visible());
        assert_eq!(state.title(), "");
    }
}
