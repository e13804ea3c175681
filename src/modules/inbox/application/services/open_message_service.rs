use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::inbox::application::domain::ContactMessage;
use crate::inbox::application::ports::incoming::use_cases::{InboxError, OpenMessageUseCase};
use crate::inbox::application::ports::outgoing::MessageStore;
use crate::shared::deadline::with_deadline;

pub struct OpenMessageService<S>
where
    S: MessageStore,
{
    store: S,
    timeout: Duration,
}

impl<S> OpenMessageService<S>
where
    S: MessageStore,
{
    pub fn new(store: S, timeout: Duration) -> Self {
        Self { store, timeout }
    }
}

#[async_trait]
impl<S> OpenMessageUseCase for OpenMessageService<S>
where
    S: MessageStore + Send + Sync,
{
    async fn execute(&self, id: i64) -> Result<ContactMessage, InboxError> {
        if !self.store.is_configured() {
            return Err(InboxError::NotConfigured);
        }

        let mut message = with_deadline(self.timeout, self.store.find(id))
            .await?
            .ok_or(InboxError::NotFound)?;

        // Read is one-way; an already read message is never written again.
        if !message.is_read {
            with_deadline(self.timeout, self.store.mark_read(id)).await?;
            message.is_read = true;
            debug!(message_id = id, "Message marked read");
        }

        Ok(message)
    }
}
