//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the identity and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`]. The document is
//! served by Swagger UI in debug builds and printed by `openapi-dump`.

use crate::inbound::http::schemas::{ErrorCodeSchema, FailureEnvelopeSchema, UserSchema};
use crate::inbound::http::users::{
    AuthResponse, LoginRequest, RegisterRequest, SetAvatarRequest, SetAvatarResponse,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chat identity API",
        description = "Registration, login and avatar selection for the chat application."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::users::set_avatar,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        FailureEnvelopeSchema,
        ErrorCodeSchema,
        RegisterRequest,
        LoginRequest,
        SetAvatarRequest,
        AuthResponse,
        SetAvatarResponse,
    )),
    tags(
        (name = "auth", description = "Account registration, login and avatar selection"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
