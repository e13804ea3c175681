use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use super::error_mapping::seed_failed;
use crate::admin::application::domain::{ConfirmQuery, Notice};
use crate::admin::application::ports::incoming::use_cases::SeedOutcome;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponse {
    pub notice: Notice,
    pub projects: usize,
    pub blog_posts: usize,
}

/// Overwrite stored content with the built-in content
#[utoipa::path(
    post,
    path = "/api/admin/seed",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("confirm" = Option<bool>, Query, description = "Must be true")),
    responses(
        (status = 200, description = "Content seeded", body = inline(SuccessResponse<SeedResponse>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 428, description = "Confirmation missing", body = ErrorResponse),
        (status = 502, description = "Backend rejected the write", body = ErrorResponse),
        (status = 503, description = "Backend not configured", body = ErrorResponse),
    )
)]
#[post("/api/admin/seed")]
pub async fn seed_content_handler(
    admin: AdminSession,
    query: web::Query<ConfirmQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin.seed.execute(query.into_inner().into()).await {
        Ok(SeedOutcome::Seeded {
            notice,
            projects,
            blog_posts,
        }) => {
            info!(admin = %admin.admin.email, "Database seeded");
            ApiResponse::success(SeedResponse {
                notice,
                projects,
                blog_posts,
            })
        }
        Ok(SeedOutcome::Cancelled) => {
            ApiResponse::confirmation_required("Seeding overwrites all content; pass confirm=true")
        }
        Err(e) => seed_failed(e),
    }
}
