use actix_web::{http::StatusCode, post, web, Responder};
use tracing::info;

use super::error_mapping::save_failed;
use crate::admin::application::domain::{EditSession, ProjectDraft};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::content::application::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create or update a project
///
/// A draft without a positive `id` creates a new project; otherwise the
/// stored project with that id is overwritten.
#[utoipa::path(
    post,
    path = "/api/admin/projects",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = ProjectDraft,
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<Project>)),
        (status = 200, description = "Project updated", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Draft failed validation", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 502, description = "Backend rejected the write", body = ErrorResponse),
        (status = 503, description = "Backend not configured", body = ErrorResponse),
        (status = 504, description = "Backend timed out", body = ErrorResponse),
    )
)]
#[post("/api/admin/projects")]
pub async fn save_project_handler(
    admin: AdminSession,
    req: web::Json<ProjectDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = req.into_inner();
    let mut session = if draft.targets_existing() {
        EditSession::open_existing(draft)
    } else {
        EditSession::open_new(draft)
    };

    match data.admin.save_project.execute(&mut session).await {
        Ok(saved) => {
            info!(admin = %admin.admin.email, project_id = saved.record.id, "Project saved");
            let status = if session.is_existing() {
                StatusCode::OK
            } else {
                StatusCode::CREATED
            };
            ApiResponse::with_status(status, saved)
        }
        Err(e) => save_failed(e),
    }
}
