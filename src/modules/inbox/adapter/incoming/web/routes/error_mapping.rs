use actix_web::{http::StatusCode, HttpResponse};
use tracing::error;

use crate::inbox::application::ports::incoming::use_cases::InboxError;
use crate::shared::api::ApiResponse;

pub(crate) fn inbox_failed(err: InboxError) -> HttpResponse {
    match err {
        InboxError::NotConfigured => ApiResponse::not_configured(),
        InboxError::Validation(e) => ApiResponse::error_with_details(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            &e.to_string(),
            serde_json::to_value(&e.fields).ok(),
        ),
        InboxError::NotFound => ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found"),
        InboxError::Remote(msg) => {
            error!("Inbox backend error: {}", msg);
            ApiResponse::remote_error(&msg)
        }
        InboxError::TimedOut(ms) => {
            ApiResponse::remote_timeout(&format!("Backend did not answer within {ms}ms"))
        }
    }
}
