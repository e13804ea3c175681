use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use uuid::Uuid;

use crate::admin::application::domain::{
    BlogPostDraft, Confirmation, EditSession, ProfileDraft, ProjectDraft,
};
use crate::admin::application::ports::incoming::use_cases::{
    DeleteBlogPostUseCase, DeleteError, DeleteOutcome, DeleteProjectUseCase, SaveBlogPostUseCase,
    SaveError, SaveProfileUseCase, SaveProjectUseCase, Saved, SeedContentUseCase, SeedError,
    SeedOutcome,
};
use crate::auth::application::domain::{
    AdminIdentity, AdminSession, AdminSessionView, LoginRequest,
};
use crate::auth::application::ports::incoming::use_cases::{
    GetSessionUseCase, LoginError, LoginUseCase, LogoutError, LogoutUseCase, SessionError,
};
use crate::content::application::domain::entities::{BlogPost, Profile, Project};
use crate::inbox::application::domain::{ContactForm, ContactMessage, InboxSummary};
use crate::inbox::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, InboxError, ListMessagesUseCase, OpenMessageUseCase,
    SubmitMessageUseCase,
};
use crate::tests::support::auth_helper::{REVOKED_ADMIN_TOKEN, TEST_ADMIN_EMAIL, TEST_ADMIN_TOKEN};

//
// ──────────────────────────────────────────────────────────
// Auth
// ──────────────────────────────────────────────────────────
//

/// Accepts `TEST_ADMIN_TOKEN`, reports `REVOKED_ADMIN_TOKEN` as signed out,
/// rejects everything else.
#[derive(Default, Clone)]
pub struct StubGetSessionUseCase;

impl StubGetSessionUseCase {
    pub fn test_admin() -> AdminIdentity {
        AdminIdentity {
            id: Uuid::nil(),
            email: TEST_ADMIN_EMAIL.to_string(),
        }
    }
}

#[async_trait]
impl GetSessionUseCase for StubGetSessionUseCase {
    async fn execute(&self, token: &str) -> Result<AdminSession, SessionError> {
        match token {
            TEST_ADMIN_TOKEN => Ok(AdminSession {
                admin: Self::test_admin(),
                expires_at: Utc::now() + ChronoDuration::hours(1),
                token: token.to_string(),
            }),
            REVOKED_ADMIN_TOKEN => Err(SessionError::Revoked),
            _ => Err(SessionError::InvalidToken),
        }
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUseCase;

#[async_trait]
impl LoginUseCase for StubLoginUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<AdminSessionView, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUseCase;

#[async_trait]
impl LogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _session: &AdminSession) -> Result<(), LogoutError> {
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Admin
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubSaveProjectUseCase;

#[async_trait]
impl SaveProjectUseCase for StubSaveProjectUseCase {
    async fn execute(
        &self,
        _session: &mut EditSession<ProjectDraft>,
    ) -> Result<Saved<Project>, SaveError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSaveBlogPostUseCase;

#[async_trait]
impl SaveBlogPostUseCase for StubSaveBlogPostUseCase {
    async fn execute(
        &self,
        _session: &mut EditSession<BlogPostDraft>,
    ) -> Result<Saved<BlogPost>, SaveError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSaveProfileUseCase;

#[async_trait]
impl SaveProfileUseCase for StubSaveProfileUseCase {
    async fn execute(
        &self,
        _session: &mut EditSession<ProfileDraft>,
    ) -> Result<Saved<Profile>, SaveError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(
        &self,
        _id: i64,
        _confirmation: Confirmation,
    ) -> Result<DeleteOutcome, DeleteError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteBlogPostUseCase;

#[async_trait]
impl DeleteBlogPostUseCase for StubDeleteBlogPostUseCase {
    async fn execute(
        &self,
        _id: i64,
        _confirmation: Confirmation,
    ) -> Result<DeleteOutcome, DeleteError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSeedContentUseCase;

#[async_trait]
impl SeedContentUseCase for StubSeedContentUseCase {
    async fn execute(&self, _confirmation: Confirmation) -> Result<SeedOutcome, SeedError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Inbox
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubSubmitMessageUseCase;

#[async_trait]
impl SubmitMessageUseCase for StubSubmitMessageUseCase {
    async fn execute(&self, _form: ContactForm) -> Result<ContactMessage, InboxError> {
        unimplemented!("Not used in this test")
    }
}

/// Answers with an empty inbox.
#[derive(Default, Clone)]
pub struct StubListMessagesUseCase;

#[async_trait]
impl ListMessagesUseCase for StubListMessagesUseCase {
    async fn execute(&self) -> Result<InboxSummary, InboxError> {
        Ok(InboxSummary::new(Vec::new()))
    }
}

#[derive(Default, Clone)]
pub struct StubOpenMessageUseCase;

#[async_trait]
impl OpenMessageUseCase for StubOpenMessageUseCase {
    async fn execute(&self, _id: i64) -> Result<ContactMessage, InboxError> {
        Err(InboxError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteMessageUseCase;

#[async_trait]
impl DeleteMessageUseCase for StubDeleteMessageUseCase {
    async fn execute(
        &self,
        _id: i64,
        _confirmation: Confirmation,
    ) -> Result<DeleteOutcome, InboxError> {
        unimplemented!("Not used in this test")
    }
}
