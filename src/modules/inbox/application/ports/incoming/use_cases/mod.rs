use async_trait::async_trait;

use crate::admin::application::domain::{Confirmation, ValidationError};
use crate::admin::application::ports::incoming::use_cases::DeleteOutcome;
use crate::inbox::application::domain::{ContactForm, ContactMessage, InboxSummary};
use crate::inbox::application::ports::outgoing::MessageStoreError;
use crate::shared::deadline::StoreCallError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InboxError {
    #[error("Backend not configured")]
    NotConfigured,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Message not found")]
    NotFound,

    #[error("{0}")]
    Remote(String),

    #[error("Request timed out after {0}ms")]
    TimedOut(u64),
}

impl From<StoreCallError<MessageStoreError>> for InboxError {
    fn from(err: StoreCallError<MessageStoreError>) -> Self {
        match err {
            StoreCallError::Store(MessageStoreError::NotConfigured) => InboxError::NotConfigured,
            StoreCallError::Store(MessageStoreError::NotFound) => InboxError::NotFound,
            StoreCallError::Store(other) => InboxError::Remote(other.to_string()),
            StoreCallError::TimedOut(limit) => InboxError::TimedOut(limit.as_millis() as u64),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Ports (Use Cases)
// ──────────────────────────────────────────────────────────
//

/// Public contact form submission.
#[async_trait]
pub trait SubmitMessageUseCase: Send + Sync {
    async fn execute(&self, form: ContactForm) -> Result<ContactMessage, InboxError>;
}

#[async_trait]
pub trait ListMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<InboxSummary, InboxError>;
}

/// Returns the message, marking it read the first time it is opened.
#[async_trait]
pub trait OpenMessageUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<ContactMessage, InboxError>;
}

#[async_trait]
pub trait DeleteMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i64,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome, InboxError>;
}
