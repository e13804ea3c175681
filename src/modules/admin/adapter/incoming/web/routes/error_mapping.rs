use actix_web::{http::StatusCode, HttpResponse};
use tracing::{error, warn};

use crate::admin::application::domain::ValidationError;
use crate::admin::application::ports::incoming::use_cases::{DeleteError, SaveError, SeedError};
use crate::shared::api::ApiResponse;

pub(crate) const CONFIRM_DELETE: &str = "Deleting requires confirm=true";

pub(crate) fn validation_failed(err: &ValidationError) -> HttpResponse {
    ApiResponse::error_with_details(
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
        &err.to_string(),
        serde_json::to_value(&err.fields).ok(),
    )
}

fn timed_out(ms: u64) -> HttpResponse {
    ApiResponse::remote_timeout(&format!("Backend did not answer within {ms}ms"))
}

pub(crate) fn save_failed(err: SaveError) -> HttpResponse {
    match err {
        SaveError::NotConfigured => ApiResponse::not_configured(),
        SaveError::Validation(e) => validation_failed(&e),
        SaveError::Session(e) => ApiResponse::conflict("EDIT_SESSION_UNAVAILABLE", &e.to_string()),
        SaveError::Remote(msg) => {
            error!("Backend rejected save: {}", msg);
            ApiResponse::remote_error(&msg)
        }
        SaveError::TimedOut(ms) => {
            warn!("Save timed out after {}ms", ms);
            timed_out(ms)
        }
    }
}

pub(crate) fn delete_failed(err: DeleteError) -> HttpResponse {
    match err {
        DeleteError::NotConfigured => ApiResponse::not_configured(),
        DeleteError::NotFound => ApiResponse::not_found("NOT_FOUND", "Record not found"),
        DeleteError::Remote(msg) => {
            error!("Backend rejected delete: {}", msg);
            ApiResponse::remote_error(&msg)
        }
        DeleteError::TimedOut(ms) => timed_out(ms),
    }
}

pub(crate) fn seed_failed(err: SeedError) -> HttpResponse {
    match err {
        SeedError::NotConfigured => ApiResponse::not_configured(),
        SeedError::Remote(msg) => {
            error!("Backend rejected seed: {}", msg);
            ApiResponse::remote_error(&msg)
        }
        SeedError::TimedOut(ms) => timed_out(ms),
    }
}
