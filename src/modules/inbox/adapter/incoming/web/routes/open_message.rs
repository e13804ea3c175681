use actix_web::{post, web, Responder};

use super::error_mapping::inbox_failed;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::inbox::application::domain::ContactMessage;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Open a message
///
/// Marks the message read the first time it is opened.
#[utoipa::path(
    post,
    path = "/api/admin/messages/{id}/open",
    tag = "inbox",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message", body = inline(SuccessResponse<ContactMessage>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "No such message", body = ErrorResponse),
    )
)]
#[post("/api/admin/messages/{id}/open")]
pub async fn open_message_handler(
    _admin: AdminSession,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.inbox.open.execute(path.into_inner()).await {
        Ok(message) => ApiResponse::success(message),
        Err(e) => inbox_failed(e),
    }
}
