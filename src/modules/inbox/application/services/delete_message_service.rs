use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tracing::{info, warn};

use crate::admin::application::domain::Confirmation;
use crate::admin::application::ports::incoming::use_cases::DeleteOutcome;
use crate::admin::application::services::{NotificationCenter, NOT_CONFIGURED_NOTICE};
use crate::inbox::application::ports::incoming::use_cases::{DeleteMessageUseCase, InboxError};
use crate::inbox::application::ports::outgoing::MessageStore;
use crate::shared::deadline::with_deadline;

const DELETED: &str = "Message deleted";
const DELETE_FAILED: &str = "Error deleting message";

pub struct DeleteMessageService<S>
where
    S: MessageStore,
{
    store: S,
    notices: Arc<NotificationCenter>,
    write_timeout: Duration,
}

impl<S> DeleteMessageService<S>
where
    S: MessageStore,
{
    pub fn new(store: S, notices: Arc<NotificationCenter>, write_timeout: Duration) -> Self {
        Self {
            store,
            notices,
            write_timeout,
        }
    }
}

#[async_trait]
impl<S> DeleteMessageUseCase for DeleteMessageService<S>
where
    S: MessageStore + Send + Sync,
{
    async fn execute(
        &self,
        id: i64,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome, InboxError> {
        if !confirmation.is_confirmed() {
            return Ok(DeleteOutcome::Cancelled);
        }

        if !self.store.is_configured() {
            self.notices.error(NOT_CONFIGURED_NOTICE);
            return Err(InboxError::NotConfigured);
        }

        match with_deadline(self.write_timeout, self.store.delete(id)).await {
            Ok(()) => {
                info!(message_id = id, "Message deleted");
                Ok(DeleteOutcome::Deleted(self.notices.success(DELETED)))
            }
            Err(err) => {
                let err = InboxError::from(err);
                warn!(message_id = id, error = %err, "Message delete failed");
                self.notices.failure(&err, DELETE_FAILED);
                Err(err)
            }
        }
    }
}
