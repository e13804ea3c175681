use std::sync::Arc;

use deadpool_redis::Pool;
use sea_orm::DatabaseConnection;

/// Stand-in for every outgoing port when no database is configured.
///
/// Each module implements its own ports for this type under
/// `adapter/outgoing/unconfigured.rs`: reads short-circuit, writes are
/// refused with a "not configured" error, and `is_configured()` is false.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredBackend;

/// Live connections shared with the readiness probe. Both are `None` when the
/// service runs on the built-in content only.
#[derive(Clone, Default)]
pub struct BackendHandles {
    pub db: Option<Arc<DatabaseConnection>>,
    pub redis: Option<Arc<Pool>>,
}

impl BackendHandles {
    pub fn unconfigured() -> Self {
        Self::default()
    }
}
