use async_trait::async_trait;

use crate::admin::application::domain::{Confirmation, Notice};
use crate::admin::application::ports::outgoing::ContentWriterError;
use crate::shared::deadline::StoreCallError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteError {
    #[error("Backend not configured")]
    NotConfigured,

    #[error("Record not found")]
    NotFound,

    #[error("{0}")]
    Remote(String),

    #[error("Request timed out after {0}ms")]
    TimedOut(u64),
}

impl From<StoreCallError<ContentWriterError>> for DeleteError {
    fn from(err: StoreCallError<ContentWriterError>) -> Self {
        match err {
            StoreCallError::Store(ContentWriterError::NotConfigured) => DeleteError::NotConfigured,
            StoreCallError::Store(ContentWriterError::NotFound) => DeleteError::NotFound,
            StoreCallError::Store(other) => DeleteError::Remote(other.to_string()),
            StoreCallError::TimedOut(limit) => DeleteError::TimedOut(limit.as_millis() as u64),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The operator declined the prompt. Nothing was sent.
    Cancelled,
    Deleted(Notice),
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i64,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome, DeleteError>;
}

#[async_trait]
pub trait DeleteBlogPostUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i64,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome, DeleteError>;
}
