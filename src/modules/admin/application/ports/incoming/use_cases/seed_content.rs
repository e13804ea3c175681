use async_trait::async_trait;

use crate::admin::application::domain::{Confirmation, Notice};
use crate::admin::application::ports::outgoing::ContentWriterError;
use crate::shared::deadline::StoreCallError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("Backend not configured")]
    NotConfigured,

    #[error("{0}")]
    Remote(String),

    #[error("Request timed out after {0}ms")]
    TimedOut(u64),
}

impl From<StoreCallError<ContentWriterError>> for SeedError {
    fn from(err: StoreCallError<ContentWriterError>) -> Self {
        match err {
            StoreCallError::Store(ContentWriterError::NotConfigured) => SeedError::NotConfigured,
            StoreCallError::Store(other) => SeedError::Remote(other.to_string()),
            StoreCallError::TimedOut(limit) => SeedError::TimedOut(limit.as_millis() as u64),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Cancelled,
    Seeded {
        notice: Notice,
        projects: usize,
        blog_posts: usize,
    },
}

/// Overwrites stored content with the built-in bundle.
#[async_trait]
pub trait SeedContentUseCase: Send + Sync {
    async fn execute(&self, confirmation: Confirmation) -> Result<SeedOutcome, SeedError>;
}
