use actix_web::{get, web, Responder};

use super::error_mapping::inbox_failed;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::inbox::application::domain::InboxSummary;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List inbox messages, newest first
#[utoipa::path(
    get,
    path = "/api/admin/messages",
    tag = "inbox",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Messages and unread count", body = inline(SuccessResponse<InboxSummary>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 503, description = "Backend not configured", body = ErrorResponse),
    )
)]
#[get("/api/admin/messages")]
pub async fn list_messages_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.inbox.list.execute().await {
        Ok(summary) => ApiResponse::success(summary),
        Err(e) => inbox_failed(e),
    }
}
