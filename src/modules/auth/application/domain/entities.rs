use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Stored admin row. The hash never leaves the auth module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAccount {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

impl AdminAccount {
    pub fn identity(&self) -> AdminIdentity {
        AdminIdentity {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminIdentity {
    pub id: Uuid,
    #[schema(example = "owner@example.com")]
    pub email: String,
}

/// A verified, unrevoked bearer token. Every admin route takes one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub admin: AdminIdentity,
    pub expires_at: DateTime<Utc>,
    #[serde(skip)]
    pub token: String,
}

/// What a successful sign-in hands back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminSessionView {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub admin: AdminIdentity,
}
