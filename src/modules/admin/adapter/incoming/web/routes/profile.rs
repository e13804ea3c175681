use actix_web::{get, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::error_mapping::save_failed;
use crate::admin::application::domain::{
    ContactInfoForm, EditSession, MainInfoForm, ProfileDraft, ProfileEdit, ProfileText,
    SkillsBuilder,
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::content::application::domain::entities::{Profile, Skill};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// The profile as editable structured text.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileTextBody {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SkillsBody {
    pub skills: Vec<Skill>,
}

/// Section forms and raw text all merge into the profile currently served.
async fn save_profile_edit(
    admin: &AdminSession,
    data: &web::Data<AppState>,
    edit: ProfileEdit,
) -> HttpResponse {
    let base = data.content.current().await.view.profile.clone();
    let mut session = EditSession::open_existing(ProfileDraft::new(base, edit));

    match data.admin.save_profile.execute(&mut session).await {
        Ok(saved) => {
            info!(admin = %admin.admin.email, "{}", saved.notice.text);
            ApiResponse::success(saved)
        }
        Err(e) => save_failed(e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Current profile as pretty-printed JSON text
#[utoipa::path(
    get,
    path = "/api/admin/profile/text",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile text", body = inline(SuccessResponse<ProfileTextBody>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/profile/text")]
pub async fn get_profile_text_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    let snapshot = data.content.current().await;
    let ProfileText(text) = ProfileText::from_profile(&snapshot.view.profile);
    ApiResponse::success(ProfileTextBody { text })
}

/// Replace the whole profile from structured text
#[utoipa::path(
    put,
    path = "/api/admin/profile",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = ProfileTextBody,
    responses(
        (status = 200, description = "Profile saved", body = inline(SuccessResponse<Profile>)),
        (status = 400, description = "Text is not a valid profile", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 503, description = "Backend not configured", body = ErrorResponse),
    )
)]
#[put("/api/admin/profile")]
pub async fn save_profile_text_handler(
    admin: AdminSession,
    req: web::Json<ProfileTextBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let edit = ProfileEdit::Raw(ProfileText(req.into_inner().text));
    save_profile_edit(&admin, &data, edit).await
}

/// Update name, headline and about text
#[utoipa::path(
    put,
    path = "/api/admin/profile/main",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = MainInfoForm,
    responses(
        (status = 200, description = "Profile saved", body = inline(SuccessResponse<Profile>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[put("/api/admin/profile/main")]
pub async fn save_main_info_handler(
    admin: AdminSession,
    req: web::Json<MainInfoForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    save_profile_edit(&admin, &data, ProfileEdit::Main(req.into_inner())).await
}

/// Update email and social links
#[utoipa::path(
    put,
    path = "/api/admin/profile/contact",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = ContactInfoForm,
    responses(
        (status = 200, description = "Profile saved", body = inline(SuccessResponse<Profile>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[put("/api/admin/profile/contact")]
pub async fn save_contact_info_handler(
    admin: AdminSession,
    req: web::Json<ContactInfoForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    save_profile_edit(&admin, &data, ProfileEdit::Contact(req.into_inner())).await
}

/// Replace the skills list
#[utoipa::path(
    put,
    path = "/api/admin/profile/skills",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = SkillsBody,
    responses(
        (status = 200, description = "Profile saved", body = inline(SuccessResponse<Profile>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[put("/api/admin/profile/skills")]
pub async fn save_skills_handler(
    admin: AdminSession,
    req: web::Json<SkillsBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let builder = SkillsBuilder::from(req.into_inner().skills);
    save_profile_edit(&admin, &data, ProfileEdit::Skills(builder)).await
}
