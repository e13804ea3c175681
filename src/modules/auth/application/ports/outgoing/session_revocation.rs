use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RevocationError {
    #[error("Session store not configured")]
    NotConfigured,

    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Revoked tokens, keyed by their SHA-256 hash. Entries expire with the token.
#[async_trait]
pub trait SessionRevocation: Send + Sync {
    async fn revoke(&self, token_hash: &str, ttl_secs: u64) -> Result<(), RevocationError>;
    async fn is_revoked(&self, token_hash: &str) -> Result<bool, RevocationError>;
}
