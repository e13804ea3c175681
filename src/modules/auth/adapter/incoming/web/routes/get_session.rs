use actix_web::{get, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::AdminSession;
use crate::shared::api::ApiResponse;

/// Current admin session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Signed in", body = inline(SuccessResponse<AdminSession>)),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
    )
)]
#[get("/api/auth/session")]
pub async fn get_session_handler(admin: AdminSession) -> impl Responder {
    ApiResponse::success(admin)
}
