use tracing::info;

use crate::auth::application::domain::LoginRequest;
use crate::auth::application::ports::incoming::use_cases::{BootstrapError, BootstrapOutcome};
use crate::auth::application::ports::outgoing::{AdminAccounts, PasswordHasher};

/// Creates the first admin from start-up credentials when none with that
/// email exists.
pub struct BootstrapAdminService<A, H>
where
    A: AdminAccounts,
    H: PasswordHasher,
{
    accounts: A,
    hasher: H,
}

impl<A, H> BootstrapAdminService<A, H>
where
    A: AdminAccounts,
    H: PasswordHasher,
{
    pub fn new(accounts: A, hasher: H) -> Self {
        Self { accounts, hasher }
    }

    pub async fn run(&self, email: &str, password: &str) -> Result<BootstrapOutcome, BootstrapError> {
        if !self.accounts.is_configured() {
            return Ok(BootstrapOutcome::Skipped);
        }

        let request = LoginRequest::new(email.to_string(), password.to_string())
            .map_err(|e| BootstrapError::InvalidCredentials(e.to_string()))?;

        if self.accounts.find_by_email(request.email()).await?.is_some() {
            return Ok(BootstrapOutcome::AlreadyPresent);
        }

        let hash = self.hasher.hash_password(request.password()).await?;
        let account = self.accounts.create(request.email(), &hash).await?;

        info!(admin_id = %account.id, "Bootstrap admin created");
        Ok(BootstrapOutcome::Created)
    }
}
