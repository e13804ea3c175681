use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SignedOut {
    #[schema(example = "Signed out")]
    pub message: String,
}

/// Admin sign-out
///
/// Revokes the presented token for the rest of its lifetime.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Signed out", body = inline(SuccessResponse<SignedOut>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 502, description = "Session store unavailable", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(admin: AdminSession, data: web::Data<AppState>) -> impl Responder {
    match data.auth.logout.execute(&admin).await {
        Ok(()) => ApiResponse::success(SignedOut {
            message: "Signed out".to_string(),
        }),
        Err(e) => {
            error!(error = %e, "Sign-out failed");
            ApiResponse::remote_error(&e.to_string())
        }
    }
}
