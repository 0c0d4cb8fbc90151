//! Content API
//!
//! Async bindings to the remote archive endpoints, organized by transport.

mod archive;
mod error;

use async_trait::async_trait;

use crate::models::{ArchiveDetail, ArchiveId, ArchivePage};
use crate::query::ListParams;

pub use archive::HttpArchiveApi;
pub use error::{ApiError, ApiResult};

/// Archive endpoints consumed by the recycle page
///
/// Futures are not `Send`: everything runs on the browser main thread.
#[async_trait(?Send)]
pub trait ArchiveApi {
    /// `getArchives`: one page of archives matching `params`
    async fn list_archives(&self, params: &ListParams) -> ApiResult<ArchivePage>;

    /// `getArchiveInfo`: full record including content body
    async fn archive_info(&self, id: ArchiveId) -> ApiResult<ArchiveDetail>;

    /// `recoverArchive`: restore one archive from the recycle bin
    async fn recover_archive(&self, id: ArchiveId) -> ApiResult<()>;

    /// `deleteArchive`: permanently remove one archive
    async fn delete_archive(&self, id: ArchiveId) -> ApiResult<()>;
}
