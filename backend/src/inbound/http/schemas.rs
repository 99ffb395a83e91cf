//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and live in the inbound adapter
//! layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Credentials did not match.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The referenced user does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// User name or email already taken.
    #[schema(rename = "conflict")]
    Conflict,
    /// The credential store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`super::error::FailureEnvelope`].
#[derive(ToSchema)]
#[schema(as = FailureEnvelope)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FailureEnvelopeSchema {
    /// Always `false`.
    #[schema(example = false)]
    status: bool,
    /// Human-readable message.
    #[schema(example = "Email already registered")]
    msg: String,
    code: ErrorCodeSchema,
    /// Offending field and a stable detail code, when applicable.
    #[schema(value_type = Option<Object>, example = json!({"field": "email", "code": "email_taken"}))]
    details: Option<serde_json::Value>,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "bob")]
    user_name: String,
    #[schema(example = "b@x.com")]
    email: String,
    #[schema(example = false)]
    is_avatar_image_set: bool,
    /// Client-encoded image, empty until an avatar is chosen.
    #[schema(example = "")]
    avatar_image: String,
}
