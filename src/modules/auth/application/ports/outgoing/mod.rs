pub mod admin_accounts;
pub mod password_hasher;
pub mod session_revocation;
pub mod token_provider;

pub use admin_accounts::{AdminAccounts, AdminAccountsError};
pub use password_hasher::{HashError, PasswordHasher};
pub use session_revocation::{RevocationError, SessionRevocation};
pub use token_provider::{IssuedToken, TokenClaims, TokenError, TokenProvider};
