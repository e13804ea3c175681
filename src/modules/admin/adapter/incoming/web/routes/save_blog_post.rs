use actix_web::{get, http::StatusCode, post, web, Responder};
use chrono::Utc;
use tracing::info;

use super::error_mapping::save_failed;
use crate::admin::application::domain::{BlogPostDraft, EditSession};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminSession;
use crate::content::application::domain::entities::BlogPost;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Blank blog post draft dated today
#[utoipa::path(
    get,
    path = "/api/admin/blogs/new",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Empty draft", body = inline(SuccessResponse<BlogPostDraft>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[get("/api/admin/blogs/new")]
pub async fn new_blog_post_draft_handler(_admin: AdminSession) -> impl Responder {
    ApiResponse::success(BlogPostDraft::new_for_today(Utc::now().date_naive()))
}

/// Create or update a blog post
#[utoipa::path(
    post,
    path = "/api/admin/blogs",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = BlogPostDraft,
    responses(
        (status = 201, description = "Post created", body = inline(SuccessResponse<BlogPost>)),
        (status = 200, description = "Post updated", body = inline(SuccessResponse<BlogPost>)),
        (status = 400, description = "Draft failed validation", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 502, description = "Backend rejected the write", body = ErrorResponse),
        (status = 503, description = "Backend not configured", body = ErrorResponse),
    )
)]
#[post("/api/admin/blogs")]
pub async fn save_blog_post_handler(
    admin: AdminSession,
    req: web::Json<BlogPostDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = req.into_inner();
    let mut session = if draft.targets_existing() {
        EditSession::open_existing(draft)
    } else {
        EditSession::open_new(draft)
    };

    match data.admin.save_blog_post.execute(&mut session).await {
        Ok(saved) => {
            info!(admin = %admin.admin.email, slug = %saved.record.slug, "Blog post saved");
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

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::admin::application::domain::{Notice, NoticeKind};
    use crate::admin::application::ports::incoming::use_cases::{
        SaveBlogPostUseCase, SaveError, Saved,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::admin_auth_header;

    #[derive(Clone)]
    struct MockSaveBlogPostUseCase {
        error: Option<SaveError>,
    }

    impl MockSaveBlogPostUseCase {
        fn success() -> Self {
            Self { error: None }
        }

        fn error(err: SaveError) -> Self {
            Self { error: Some(err) }
        }
    }

    #[async_trait]
    impl SaveBlogPostUseCase for MockSaveBlogPostUseCase {
        async fn execute(
            &self,
            session: &mut EditSession<BlogPostDraft>,
        ) -> Result<Saved<BlogPost>, SaveError> {
            if let Some(err) = &self.error {
                return Err(err.clone());
            }
            let record = session.begin_save()?;
            session.complete();
            let now = Utc::now();
            Ok(Saved {
                record: BlogPost {
                    id: record.id.unwrap_or(9),
                    title: record.title,
                    excerpt: record.excerpt,
                    date: record.date,
                    read_time: record.read_time,
                    slug: record.slug,
                    link: record.link,
                },
                notice: Notice {
                    kind: NoticeKind::Success,
                    text: "Post created successfully!".to_string(),
                    shown_at: now,
                    expires_at: now,
                },
            })
        }
    }

    fn post_body(slug: &str) -> Value {
        json!({
            "title": "Hello",
            "excerpt": "First",
            "date": "Jan 02, 2024",
            "readTime": "3 min read",
            "slug": slug
        })
    }

    #[actix_web::test]
    async fn test_save_blog_post_create_returns_201() {
        // Arrange
        let app_state = TestAppStateBuilder::default()
            .with_save_blog_post(MockSaveBlogPostUseCase::success())
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(save_blog_post_handler))
                .await;

        // Act
        let req = test::TestRequest::post()
            .uri("/api/admin/blogs")
            .insert_header(admin_auth_header())
            .set_json(post_body("hello"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["record"]["id"], 9);
        assert_eq!(body["data"]["record"]["readTime"], "3 min read");
    }

    #[actix_web::test]
    async fn test_save_blog_post_bad_slug_returns_400() {
        // Arrange
        let app_state = TestAppStateBuilder::default()
            .with_save_blog_post(MockSaveBlogPostUseCase::success())
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(save_blog_post_handler))
                .await;

        // Act
        let req = test::TestRequest::post()
            .uri("/api/admin/blogs")
            .insert_header(admin_auth_header())
            .set_json(post_body("Hello World"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["details"][0]["field"], "slug");
        assert_eq!(body["error"]["details"][0]["problem"]["kind"], "invalid");
    }

    #[actix_web::test]
    async fn test_save_blog_post_timeout_returns_504() {
        // Arrange
        let app_state = TestAppStateBuilder::default()
            .with_save_blog_post(MockSaveBlogPostUseCase::error(SaveError::TimedOut(10000)))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(save_blog_post_handler))
                .await;

        // Act
        let req = test::TestRequest::post()
            .uri("/api/admin/blogs")
            .insert_header(admin_auth_header())
            .set_json(post_body("hello"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[actix_web::test]
    async fn test_new_blog_post_draft_is_dated_today() {
        // Arrange
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(new_blog_post_draft_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::get()
            .uri("/api/admin/blogs/new")
            .insert_header(admin_auth_header())
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let expected = Utc::now().date_naive().format("%b %-d, %Y").to_string();
        assert_eq!(body["data"]["date"], expected);
        assert!(body["data"]["title"].is_null());
    }
}
