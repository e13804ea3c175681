use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use super::token_hasher::hash_token;
use crate::auth::application::domain::AdminSession;
use crate::auth::application::ports::incoming::use_cases::{LogoutError, LogoutUseCase};
use crate::auth::application::ports::outgoing::SessionRevocation;

pub struct LogoutService<R>
where
    R: SessionRevocation,
{
    revocation: R,
}

impl<R> LogoutService<R>
where
    R: SessionRevocation,
{
    pub fn new(revocation: R) -> Self {
        Self { revocation }
    }
}

#[async_trait]
impl<R> LogoutUseCase for LogoutService<R>
where
    R: SessionRevocation + Send + Sync,
{
    async fn execute(&self, session: &AdminSession) -> Result<(), LogoutError> {
        let remaining = (session.expires_at - Utc::now()).num_seconds();

        // An expired token no longer verifies; nothing to remember.
        if remaining > 0 {
            self.revocation
                .revoke(&hash_token(&session.token), remaining as u64)
                .await?;
        }

        info!(admin_id = %session.admin.id, "Admin signed out");
        Ok(())
    }
}
