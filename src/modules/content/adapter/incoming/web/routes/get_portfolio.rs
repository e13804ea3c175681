use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::content::application::domain::entities::{BlogPost, Profile, Project};
use crate::content::application::services::{ContentSnapshot, LoadPhase, SliceSources};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub blog_posts: Vec<BlogPost>,
    /// True until the first load has finished, and while a refresh runs.
    #[schema(example = false)]
    pub loading: bool,
    /// False when the service runs on built-in content only.
    #[schema(example = true)]
    pub configured: bool,
    pub sources: SliceSources,
}

impl From<ContentSnapshot> for PortfolioResponse {
    fn from(snapshot: ContentSnapshot) -> Self {
        let view = snapshot.view.as_ref().clone();
        Self {
            profile: view.profile,
            projects: view.projects,
            blog_posts: view.blog_posts,
            loading: snapshot.loading,
            configured: snapshot.configured,
            sources: snapshot.sources,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Public portfolio content
///
/// Returns the current profile, projects and blog posts. Slices that could
/// not be read from the database are served from built-in content.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "content",
    responses(
        (
            status = 200,
            description = "Current portfolio content",
            body = inline(SuccessResponse<PortfolioResponse>)
        ),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    let mut snapshot = data.content.current().await;

    if snapshot.phase == LoadPhase::Uninitialized {
        debug!("Portfolio requested before first load, loading now");
        snapshot = data.content.load().await;
    }

    ApiResponse::success(PortfolioResponse::from(snapshot))
}
