use async_trait::async_trait;
use serde::Serialize;

use crate::admin::application::domain::{
    BeginSaveError, BlogPostDraft, EditSession, Notice, ProfileDraft, ProjectDraft, SessionError,
    ValidationError,
};
use crate::admin::application::ports::outgoing::ContentWriterError;
use crate::content::application::domain::entities::{BlogPost, Profile, Project};
use crate::shared::deadline::StoreCallError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("Backend not configured")]
    NotConfigured,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Remote(String),

    #[error("Request timed out after {0}ms")]
    TimedOut(u64),
}

impl From<BeginSaveError> for SaveError {
    fn from(err: BeginSaveError) -> Self {
        match err {
            BeginSaveError::Session(e) => SaveError::Session(e),
            BeginSaveError::Invalid(e) => SaveError::Validation(e),
        }
    }
}

impl From<StoreCallError<ContentWriterError>> for SaveError {
    fn from(err: StoreCallError<ContentWriterError>) -> Self {
        match err {
            StoreCallError::Store(ContentWriterError::NotConfigured) => SaveError::NotConfigured,
            StoreCallError::Store(other) => SaveError::Remote(other.to_string()),
            StoreCallError::TimedOut(limit) => SaveError::TimedOut(limit.as_millis() as u64),
        }
    }
}

/// A completed save: the row as stored, and the notice shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Saved<T> {
    pub record: T,
    pub notice: Notice,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Ports (Use Cases)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SaveProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        session: &mut EditSession<ProjectDraft>,
    ) -> Result<Saved<Project>, SaveError>;
}

#[async_trait]
pub trait SaveBlogPostUseCase: Send + Sync {
    async fn execute(
        &self,
        session: &mut EditSession<BlogPostDraft>,
    ) -> Result<Saved<BlogPost>, SaveError>;
}

#[async_trait]
pub trait SaveProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        session: &mut EditSession<ProfileDraft>,
    ) -> Result<Saved<Profile>, SaveError>;
}
