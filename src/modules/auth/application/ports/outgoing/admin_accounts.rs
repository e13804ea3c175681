use async_trait::async_trait;

use crate::auth::application::domain::AdminAccount;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminAccountsError {
    #[error("Backend not configured")]
    NotConfigured,

    #[error("An admin with this email already exists")]
    AlreadyExists,

    #[error("{0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminAccounts: Send + Sync {
    fn is_configured(&self) -> bool {
        true
    }

    /// Looks up by the normalized (lowercase) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminAccount>, AdminAccountsError>;

    async fn create(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<AdminAccount, AdminAccountsError>;
}
