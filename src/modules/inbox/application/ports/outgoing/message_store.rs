use async_trait::async_trait;

use crate::inbox::application::domain::{ContactMessage, NewContactMessage};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageStoreError {
    #[error("Backend not configured")]
    NotConfigured,

    #[error("Message not found")]
    NotFound,

    #[error("{0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageStore: Send + Sync {
    fn is_configured(&self) -> bool {
        true
    }

    /// Stores an unread message and returns it with its id and timestamp.
    async fn insert(&self, message: NewContactMessage)
        -> Result<ContactMessage, MessageStoreError>;

    /// Every message, newest first.
    async fn list(&self) -> Result<Vec<ContactMessage>, MessageStoreError>;

    async fn find(&self, id: i64) -> Result<Option<ContactMessage>, MessageStoreError>;

    async fn mark_read(&self, id: i64) -> Result<(), MessageStoreError>;

    async fn delete(&self, id: i64) -> Result<(), MessageStoreError>;
}
