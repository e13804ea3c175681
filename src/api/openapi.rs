use crate::api::schemas::{
    ErrorDetail, ErrorResponse, FieldErrorDetail, FieldProblemDetail, SuccessResponse,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::admin::adapter::incoming::web::routes::{ProfileTextBody, SeedResponse, SkillsBody};
use crate::admin::application::domain::{
    BlogPostDraft, ContactInfoForm, MainInfoForm, Notice, NoticeKind, ProjectDraft,
};
use crate::auth::adapter::incoming::web::routes::{LoginRequestDto, SignedOut};
use crate::auth::application::domain::{AdminIdentity, AdminSession, AdminSessionView};
use crate::content::adapter::incoming::web::routes::PortfolioResponse;
use crate::content::application::domain::entities::{BlogPost, Profile, Project, Skill};
use crate::inbox::application::domain::{ContactForm, ContactMessage, InboxSummary};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio content, contact inbox and the admin editing surface",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Public content
        crate::content::adapter::incoming::web::routes::get_portfolio_handler,

        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_handler,
        crate::auth::adapter::incoming::web::routes::get_session_handler,
        crate::auth::adapter::incoming::web::routes::logout_handler,

        // Admin endpoints
        crate::admin::adapter::incoming::web::routes::save_project_handler,
        crate::admin::adapter::incoming::web::routes::delete_project_handler,
        crate::admin::adapter::incoming::web::routes::new_blog_post_draft_handler,
        crate::admin::adapter::incoming::web::routes::save_blog_post_handler,
        crate::admin::adapter::incoming::web::routes::delete_blog_post_handler,
        crate::admin::adapter::incoming::web::routes::get_profile_text_handler,
        crate::admin::adapter::incoming::web::routes::save_profile_text_handler,
        crate::admin::adapter::incoming::web::routes::save_main_info_handler,
        crate::admin::adapter::incoming::web::routes::save_contact_info_handler,
        crate::admin::adapter::incoming::web::routes::save_skills_handler,
        crate::admin::adapter::incoming::web::routes::seed_content_handler,
        crate::admin::adapter::incoming::web::routes::get_notice_handler,

        // Inbox endpoints
        crate::inbox::adapter::incoming::web::routes::submit_message_handler,
        crate::inbox::adapter::incoming::web::routes::list_messages_handler,
        crate::inbox::adapter::incoming::web::routes::open_message_handler,
        crate::inbox::adapter::incoming::web::routes::delete_message_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PortfolioResponse>,
            ErrorResponse,
            ErrorDetail,
            FieldErrorDetail,
            FieldProblemDetail,

            // Content
            PortfolioResponse,
            Profile,
            Project,
            BlogPost,
            Skill,

            // Auth DTOs
            LoginRequestDto,
            AdminIdentity,
            AdminSession,
            AdminSessionView,
            SignedOut,

            // Admin DTOs
            ProjectDraft,
            BlogPostDraft,
            ProfileTextBody,
            MainInfoForm,
            ContactInfoForm,
            SkillsBody,
            SeedResponse,
            Notice,
            NoticeKind,

            // Inbox DTOs
            ContactForm,
            ContactMessage,
            InboxSummary
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "content", description = "Public portfolio content"),
        (name = "auth", description = "Admin sign-in and session endpoints"),
        (name = "admin", description = "Content editing endpoints"),
        (name = "inbox", description = "Contact form and message inbox"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
