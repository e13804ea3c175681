use std::{future::Future, sync::Arc, time::Duration};

use tracing::{info, warn};

use super::notification_center::NotificationCenter;
use crate::admin::application::domain::{
    Confirmation, Draft, EditSession, Notice,
};
use crate::admin::application::ports::incoming::use_cases::{
    DeleteError, DeleteOutcome, SaveError, Saved,
};
use crate::admin::application::ports::outgoing::ContentWriterError;
use crate::content::application::services::ContentRepository;
use crate::shared::deadline::with_deadline;

/// Text shown when a write is attempted without a backend.
pub const NOT_CONFIGURED_NOTICE: &str = "Backend not configured";

/// Notice texts for one kind of save.
#[derive(Debug, Clone, Copy)]
pub struct SaveMessages {
    pub created: &'static str,
    pub updated: &'static str,
    pub failed: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteMessages {
    pub deleted: &'static str,
    pub failed: &'static str,
}

/// What every admin write needs besides its port: the repository to refresh,
/// the notice sink, and the write deadline.
#[derive(Clone)]
pub struct EditingContext {
    pub content: Arc<ContentRepository>,
    pub notices: Arc<NotificationCenter>,
    pub write_timeout: Duration,
}

impl EditingContext {
    pub fn new(
        content: Arc<ContentRepository>,
        notices: Arc<NotificationCenter>,
        write_timeout: Duration,
    ) -> Self {
        Self {
            content,
            notices,
            write_timeout,
        }
    }

    pub(crate) fn refuse_unconfigured(&self) {
        warn!("Write refused, backend not configured");
        self.notices.error(NOT_CONFIGURED_NOTICE);
    }

    pub(crate) fn notify_failure(&self, err: &impl ToString, fallback: &str) -> Notice {
        self.notices.failure(err, fallback)
    }

    /// Validate, write once, then notify and refresh. A failed write reopens
    /// the session and only notifies.
    pub(crate) async fn run_save<D, T, F, Fut>(
        &self,
        configured: bool,
        session: &mut EditSession<D>,
        messages: SaveMessages,
        write: F,
    ) -> Result<Saved<T>, SaveError>
    where
        D: Draft,
        F: FnOnce(D::Record) -> Fut,
        Fut: Future<Output = Result<T, ContentWriterError>>,
    {
        if !configured {
            self.refuse_unconfigured();
            return Err(SaveError::NotConfigured);
        }

        let record = session.begin_save()?;

        match with_deadline(self.write_timeout, write(record)).await {
            Ok(saved) => {
                session.complete();
                let text = if session.is_existing() {
                    messages.updated
                } else {
                    messages.created
                };
                let notice = self.notices.success(text);
                self.content.refresh().await;
                Ok(Saved {
                    record: saved,
                    notice,
                })
            }
            Err(err) => {
                session.reopen();
                let err = SaveError::from(err);
                warn!(error = %err, "Save failed");
                self.notify_failure(&err, messages.failed);
                Err(err)
            }
        }
    }

    /// Confirm, delete once, then notify and refresh. A failed delete only
    /// notifies.
    pub(crate) async fn run_delete<Fut>(
        &self,
        configured: bool,
        confirmation: Confirmation,
        messages: DeleteMessages,
        delete: Fut,
    ) -> Result<DeleteOutcome, DeleteError>
    where
        Fut: Future<Output = Result<(), ContentWriterError>>,
    {
        if !confirmation.is_confirmed() {
            info!("Delete cancelled by operator");
            return Ok(DeleteOutcome::Cancelled);
        }

        if !configured {
            self.refuse_unconfigured();
            return Err(DeleteError::NotConfigured);
        }

        match with_deadline(self.write_timeout, delete).await {
            Ok(()) => {
                let notice = self.notices.success(messages.deleted);
                self.content.refresh().await;
                Ok(DeleteOutcome::Deleted(notice))
            }
            Err(err) => {
                let err = DeleteError::from(err);
                warn!(error = %err, "Delete failed");
                self.notify_failure(&err, messages.failed);
                Err(err)
            }
        }
    }
}
