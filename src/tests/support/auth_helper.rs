/// Bearer token the stub session use case accepts as the signed-in admin.
pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

/// Bearer token the stub session use case reports as signed out.
pub const REVOKED_ADMIN_TOKEN: &str = "revoked-admin-token";

pub const TEST_ADMIN_EMAIL: &str = "owner@example.com";

pub fn admin_auth_header() -> (&'static str, String) {
    ("Authorization", format!("Bearer {TEST_ADMIN_TOKEN}"))
}
