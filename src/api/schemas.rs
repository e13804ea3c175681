// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Title is required")]
    pub message: String,

    /// Present on validation failures, one entry per offending field
    #[schema(nullable = false)]
    pub details: Option<Vec<FieldErrorDetail>>,
}

#[derive(Serialize, ToSchema)]
pub struct FieldErrorDetail {
    #[schema(example = "title")]
    pub field: String,

    /// `missing`, or `invalid` with a message
    pub problem: FieldProblemDetail,
}

#[derive(Serialize, ToSchema)]
pub struct FieldProblemDetail {
    #[schema(example = "missing")]
    pub kind: String,

    #[schema(example = "Slug may only contain lowercase letters, digits and dashes")]
    pub message: Option<String>,
}
