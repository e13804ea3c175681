use actix_web::{delete, web, Responder};
use tracing::info;

use super::error_mapping::inbox_failed;
use crate::admin::application::domain::{ConfirmQuery, Notice};
use crate::admin::application::ports::incoming::use_cases::DeleteOutcome;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a message
#[utoipa::path(
    delete,
    path = "/api/admin/messages/{id}",
    tag = "inbox",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Message id"),
        ("confirm" = Option<bool>, Query, description = "Must be true"),
    ),
    responses(
        (status = 200, description = "Message deleted", body = inline(SuccessResponse<Notice>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "No such message", body = ErrorResponse),
        (status = 428, description = "Confirmation missing", body = ErrorResponse),
    )
)]
#[delete("/api/admin/messages/{id}")]
pub async fn delete_message_handler(
    admin: AdminSession,
    path: web::Path<i64>,
    query: web::Query<ConfirmQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .inbox
        .delete
        .execute(id, query.into_inner().into())
        .await
    {
        Ok(DeleteOutcome::Deleted(notice)) => {
            info!(admin = %admin.admin.email, message_id = id, "Message deleted");
            ApiResponse::success(notice)
        }
        Ok(DeleteOutcome::Cancelled) => {
            ApiResponse::confirmation_required("Deleting requires confirm=true")
        }
        Err(e) => inbox_failed(e),
    }
}
