use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::{AdminSessionView, LoginRequest};
use crate::auth::application::ports::incoming::use_cases::LoginError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "owner@example.com")]
    pub email: String,

    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

/// Admin sign-in
///
/// Exchanges email and password for a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Signed in", body = inline(SuccessResponse<AdminSessionView>)),
        (status = 400, description = "Malformed credentials", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (status = 503, description = "Backend not configured", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.login.execute(request).await {
        Ok(view) => ApiResponse::success(view),
        Err(LoginError::NotConfigured) => ApiResponse::not_configured(),
        Err(LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(LoginError::Remote(msg)) => {
            error!(error = %msg, "Admin lookup failed");
            ApiResponse::remote_error(&msg)
        }
        Err(LoginError::TimedOut(ms)) => {
            warn!("Admin lookup timed out after {}ms", ms);
            ApiResponse::remote_timeout(&format!("Backend did not answer within {ms}ms"))
        }
        Err(e @ (LoginError::Hashing(_) | LoginError::TokenGeneration(_))) => {
            error!(error = %e, "Sign-in failed");
            ApiResponse::internal_error()
        }
    }
}
