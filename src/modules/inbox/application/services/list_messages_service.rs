use std::time::Duration;

use async_trait::async_trait;

use crate::inbox::application::domain::InboxSummary;
use crate::inbox::application::ports::incoming::use_cases::{InboxError, ListMessagesUseCase};
use crate::inbox::application::ports::outgoing::MessageStore;
use crate::shared::deadline::with_deadline;

pub struct ListMessagesService<S>
where
    S: MessageStore,
{
    store: S,
    read_timeout: Duration,
}

impl<S> ListMessagesService<S>
where
    S: MessageStore,
{
    pub fn new(store: S, read_timeout: Duration) -> Self {
        Self {
            store,
            read_timeout,
        }
    }
}

#[async_trait]
impl<S> ListMessagesUseCase for ListMessagesService<S>
where
    S: MessageStore + Send + Sync,
{
    async fn execute(&self) -> Result<InboxSummary, InboxError> {
        if !self.store.is_configured() {
            return Err(InboxError::NotConfigured);
        }

        let messages = with_deadline(self.read_timeout, self.store.list()).await?;
        Ok(InboxSummary::new(messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory_store::InMemoryMessageStore;

    #[tokio::test]
    async fn lists_newest_first_with_unread_count() {
        // Arrange
        let store = InMemoryMessageStore::new();
        let first = store.put("First", false);
        let second = store.put("Second", true);
        let third = store.put("Third", false);
        let service = ListMessagesService::new(store, Duration::from_secs(1));

        // Act
        let summary = service.execute().await.unwrap();

        // Assert
        let ids: Vec<i64> = summary.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![third, second, first]);
        assert_eq!(summary.unread, 2);
    }

    #[tokio::test]
    async fn empty_inbox() {
        // Arrange
        let service = ListMessagesService::new(InMemoryMessageStore::new(), Duration::from_secs(1));

        // Act
        let summary = service.execute().await.unwrap();

        // Assert
        assert!(summary.messages.is_empty());
        assert_eq!(summary.unread, 0);
    }

    #[tokio::test]
    async fn store_failure_is_remote_error() {
        // Arrange
        let store = InMemoryMessageStore::new();
        store.fail_with("connection reset");
        let service = ListMessagesService::new(store, Duration::from_secs(1));

        // Act
        let result = service.execute().await;

        // Assert
        assert_eq!(result, Err(InboxError::Remote("connection reset".to_string())));
    }
}
