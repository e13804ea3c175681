use async_trait::async_trait;

use crate::inbox::application::domain::{ContactMessage, NewContactMessage};
use crate::inbox::application::ports::outgoing::{MessageStore, MessageStoreError};
use crate::shared::backend::UnconfiguredBackend;

#[async_trait]
impl MessageStore for UnconfiguredBackend {
    fn is_configured(&self) -> bool {
        false
    }

    async fn insert(
        &self,
        _message: NewContactMessage,
    ) -> Result<ContactMessage, MessageStoreError> {
        Err(MessageStoreError::NotConfigured)
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, MessageStoreError> {
        Err(MessageStoreError::NotConfigured)
    }

    async fn find(&self, _id: i64) -> Result<Option<ContactMessage>, MessageStoreError> {
        Err(MessageStoreError::NotConfigured)
    }

    async fn mark_read(&self, _id: i64) -> Result<(), MessageStoreError> {
        Err(MessageStoreError::NotConfigured)
    }

    async fn delete(&self, _id: i64) -> Result<(), MessageStoreError> {
        Err(MessageStoreError::NotConfigured)
    }
}
