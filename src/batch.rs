//! Batch Actions
//!
//! Recover or delete a list of archives, one awaited call at a time.

use crate::api::ArchiveApi;
use crate::i18n::{t, Locale, Msg};
use crate::models::ArchiveId;
use crate::notify::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchAction {
    Recover,
    Delete,
}

impl BatchAction {
    pub fn confirm_msg(self) -> Msg {
        match self {
            BatchAction::Recover => Msg::RecoverConfirm,
            BatchAction::Delete => Msg::DeleteConfirm,
        }
    }

    fn progress_msg(self) -> Msg {
        match self {
            BatchAction::Recover => Msg::RecoverRecovering,
            BatchAction::Delete => Msg::DeleteDeleting,
        }
    }

    fn success_msg(self) -> Msg {
        match self {
            BatchAction::Recover => Msg::RecoverSuccess,
            BatchAction::Delete => Msg::DeleteSuccess,
        }
    }

    fn failure_msg(self) -> Msg {
        match self {
            BatchAction::Recover => Msg::RecoverFailure,
            BatchAction::Delete => Msg::DeleteFailure,
        }
    }
}

/// Action waiting for the user's confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAction {
    pub action: BatchAction,
    pub ids: Vec<ArchiveId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// No ids: nothing was called
    Skipped,
    Completed { count: usize },
    /// Stopped at `failed_id`; the first `completed` ids stay applied
    Aborted { completed: usize, failed_id: ArchiveId },
}

impl BatchOutcome {
    /// Selection is cleared and the table reloaded from page 1
    pub fn should_reset(&self) -> bool {
        matches!(self, BatchOutcome::Completed { .. })
    }
}

/// Run `action` over `ids` in order, stopping at the first failure
pub async fn run_batch<A, N>(
    api: &A,
    notifier: &N,
    locale: Locale,
    action: BatchAction,
    ids: &[ArchiveId],
) -> BatchOutcome
where
    A: ArchiveApi + ?Sized,
    N: Notifier + ?Sized,
{
    if ids.is_empty() {
        return BatchOutcome::Skipped;
    }

    let notice = notifier.loading(t(locale, action.progress_msg()));
    let mut completed = 0;
    for &id in ids {
        let result = match action {
            BatchAction::Recover => api.recover_archive(id).await,
            BatchAction::Delete => api.delete_archive(id).await,
        };
        if let Err(e) = result {
            log::error!(target: "batch", "[{}] archive {} failed after {} of {}: {}", action.failure_msg().id(), id, completed, ids.len(), e);
            notifier.dismiss(notice);
            notifier.error(t(locale, action.failure_msg()));
            return BatchOutcome::Aborted {
                completed,
                failed_id: id,
            };
        }
        completed += 1;
    }

    log::info!(target: "batch", "{:?} {} archives", action, completed);
    notifier.dismiss(notice);
    notifier.success(t(locale, action.success_msg()));
    BatchOutcome::Completed { count: completed }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use async_trait::async_trait;

    use crate::api::{ApiError, ApiResult, ArchiveApi};
    use crate::models::{Archive, ArchiveData, ArchiveDetail, ArchiveId, ArchivePage};
    use crate::query::ListParams;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        List(ListParams),
        Info(ArchiveId),
        Recover(ArchiveId),
        Delete(ArchiveId),
    }

    /// In-memory API recording every call; ids in `failing` are rejected
    #[derive(Default)]
    pub struct FakeApi {
        pub calls: RefCell<Vec<Call>>,
        pub failing: Vec<ArchiveId>,
        pub rows: Vec<Archive>,
    }

    impl FakeApi {
        pub fn failing_on(ids: &[ArchiveId]) -> Self {
            Self {
                failing: ids.to_vec(),
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn outcome(&self, id: ArchiveId) -> ApiResult<()> {
            if self.failing.contains(&id) {
                Err(ApiError::Rejected {
                    code: -1,
                    msg: format!("archive {} locked", id),
                })
            } else {
                Ok(())
            }
        }
    }

    pub fn archive(id: ArchiveId) -> Archive {
        Archive {
            id,
            title: format!("Archive {}", id),
            thumb: String::new(),
            module_name: "Article".to_string(),
            category_title: String::new(),
        }
    }

    #[async_trait(?Send)]
    impl ArchiveApi for FakeApi {
        async fn list_archives(&self, params: &ListParams) -> ApiResult<ArchivePage> {
            self.calls.borrow_mut().push(Call::List(params.clone()));
            Ok(ArchivePage {
                rows: self.rows.clone(),
                total: self.rows.len() as u64,
            })
        }

        async fn archive_info(&self, id: ArchiveId) -> ApiResult<ArchiveDetail> {
            self.calls.borrow_mut().push(Call::Info(id));
            if self.failing.contains(&id) {
                return Err(ApiError::MissingData);
            }
            Ok(ArchiveDetail {
                archive: archive(id),
                description: String::new(),
                data: Some(ArchiveData {
                    content: format!("<p>content {}</p>", id),
                }),
            })
        }

        async fn recover_archive(&self, id: ArchiveId) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Recover(id));
            self.outcome(id)
        }

        async fn delete_archive(&self, id: ArchiveId) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Delete(id));
            self.outcome(id)
        }
    }
}
