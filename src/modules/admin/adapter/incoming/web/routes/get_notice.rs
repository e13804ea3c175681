use actix_web::{get, web, Responder};

use crate::admin::application::domain::Notice;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Latest operator notice, or null once it has expired
#[utoipa::path(
    get,
    path = "/api/admin/notice",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active notice", body = inline(SuccessResponse<Option<Notice>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/notice")]
pub async fn get_notice_handler(_admin: AdminSession, data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.notices.active())
}
