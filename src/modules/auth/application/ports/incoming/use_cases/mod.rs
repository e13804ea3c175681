use async_trait::async_trait;

use crate::auth::application::domain::{AdminSession, AdminSessionView, LoginRequest};
use crate::auth::application::ports::outgoing::{AdminAccountsError, HashError, RevocationError};
use crate::shared::deadline::StoreCallError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Backend not configured")]
    NotConfigured,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{0}")]
    Remote(String),

    #[error("Request timed out after {0}ms")]
    TimedOut(u64),

    #[error("Password verification failed: {0}")]
    Hashing(#[from] HashError),

    #[error("Token generation failed: {0}")]
    TokenGeneration(String),
}

impl From<StoreCallError<AdminAccountsError>> for LoginError {
    fn from(err: StoreCallError<AdminAccountsError>) -> Self {
        match err {
            StoreCallError::Store(AdminAccountsError::NotConfigured) => LoginError::NotConfigured,
            StoreCallError::Store(other) => LoginError::Remote(other.to_string()),
            StoreCallError::TimedOut(limit) => LoginError::TimedOut(limit.as_millis() as u64),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Session has been signed out")]
    Revoked,

    #[error(transparent)]
    Unavailable(#[from] RevocationError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogoutError {
    #[error(transparent)]
    Unavailable(#[from] RevocationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created,
    AlreadyPresent,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("Invalid admin credentials: {0}")]
    InvalidCredentials(String),

    #[error(transparent)]
    Accounts(#[from] AdminAccountsError),

    #[error(transparent)]
    Hashing(#[from] HashError),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Ports (Use Cases)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<AdminSessionView, LoginError>;
}

/// Resolves a bearer token into the admin it was issued to.
#[async_trait]
pub trait GetSessionUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<AdminSession, SessionError>;
}

#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self, session: &AdminSession) -> Result<(), LogoutError>;
}
