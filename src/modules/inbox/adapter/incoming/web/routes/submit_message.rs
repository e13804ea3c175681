use actix_web::{post, web, Responder};
use tracing::info;

use super::error_mapping::inbox_failed;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::inbox::application::domain::{ContactForm, ContactMessage};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Send a message through the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "inbox",
    request_body = ContactForm,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<ContactMessage>)),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 503, description = "Backend not configured", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_message_handler(
    req: web::Json<ContactForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.inbox.submit.execute(req.into_inner()).await {
        Ok(message) => {
            info!(message_id = message.id, "Contact message received");
            ApiResponse::created(message)
        }
        Err(e) => inbox_failed(e),
    }
}
