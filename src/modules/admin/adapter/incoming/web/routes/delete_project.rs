use actix_web::{delete, web, Responder};
use tracing::info;

use super::error_mapping::{delete_failed, CONFIRM_DELETE};
use crate::admin::application::domain::{ConfirmQuery, Notice};
use crate::admin::application::ports::incoming::use_cases::DeleteOutcome;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project
///
/// Requires `confirm=true`; without it nothing is sent to the backend.
#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Project id"),
        ("confirm" = Option<bool>, Query, description = "Must be true"),
    ),
    responses(
        (status = 200, description = "Project deleted", body = inline(SuccessResponse<Notice>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse),
        (status = 428, description = "Confirmation missing", body = ErrorResponse),
        (status = 503, description = "Backend not configured", body = ErrorResponse),
    )
)]
#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    admin: AdminSession,
    path: web::Path<i64>,
    query: web::Query<ConfirmQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .admin
        .delete_project
        .execute(id, query.into_inner().into())
        .await
    {
        Ok(DeleteOutcome::Deleted(notice)) => {
            info!(admin = %admin.admin.email, project_id = id, "Project deleted");
            ApiResponse::success(notice)
        }
        Ok(DeleteOutcome::Cancelled) => ApiResponse::confirmation_required(CONFIRM_DELETE),
        Err(e) => delete_failed(e),
    }
}
