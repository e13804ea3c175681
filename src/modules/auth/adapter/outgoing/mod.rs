pub mod admin_accounts_postgres;
pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod session_revocation_redis;
pub mod unconfigured;

pub use admin_accounts_postgres::AdminAccountsPostgres;
pub use session_revocation_redis::RedisSessionRevocation;
