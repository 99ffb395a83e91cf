//! Identity API handlers.
//!
//! ```text
//! POST /api/auth/register {"userName":"bob","email":"b@x.com","password":"longpass1","confirmPassword":"longpass1"}
//! POST /api/auth/login {"email":"b@x.com","password":"longpass1"}
//! POST /api/auth/set-avatar/{id} {"image":"PHN2Zz4="}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{AvatarImage, LoginCredentials, Registration, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{FailureEnvelopeSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, map_avatar_error, map_login_error, map_registration_error, parse_user_id,
};

/// Sign-up body for `POST /api/auth/register`.
///
/// Missing fields deserialize as empty strings so they are reported by the
/// field validators rather than as a malformed body.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name, 3 to 50 characters.
    #[schema(example = "bob")]
    pub user_name: String,
    /// Login email, unique across users.
    #[schema(example = "b@x.com")]
    pub email: String,
    /// At least 8 characters.
    #[schema(example = "longpass1")]
    pub password: String,
    /// Must equal `password`.
    #[schema(example = "longpass1")]
    pub confirm_password: String,
}

/// Login body for `POST /api/auth/login`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "b@x.com")]
    pub email: String,
    #[schema(example = "longpass1")]
    pub password: String,
}

/// Avatar body for `POST /api/auth/set-avatar/{id}`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(default)]
pub struct SetAvatarRequest {
    /// Client-encoded image (typically base64 SVG).
    #[schema(example = "PHN2Zz4=")]
    pub image: String,
}

/// Success body for register and login.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthResponse {
    /// Always `true`.
    pub status: bool,
    /// The registered or authenticated account.
    #[schema(value_type = UserSchema)]
    pub user: User,
}

impl AuthResponse {
    fn ok(user: User) -> Self {
        Self { status: true, user }
    }
}

/// Success body for set-avatar.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetAvatarResponse {
    /// Always `true` after a successful update.
    pub is_set: bool,
    /// The stored image, echoed back.
    pub image: String,
}

/// Create an account.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = AuthResponse),
        (status = 400, description = "Invalid form", body = FailureEnvelopeSchema),
        (status = 409, description = "User name or email taken", body = FailureEnvelopeSchema),
        (status = 503, description = "Credential store unavailable", body = FailureEnvelopeSchema),
        (status = 500, description = "Internal server error", body = FailureEnvelopeSchema)
    ),
    tags = ["auth"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<web::Json<AuthResponse>> {
    let form = payload.into_inner();
    let registration = Registration::try_from_parts(
        &form.user_name,
        &form.email,
        &form.password,
        &form.confirm_password,
    )
    .map_err(map_registration_error)?;

    let user = state.registration.register(&registration).await?;
    Ok(web::Json(AuthResponse::ok(user)))
}

/// Authenticate with email and password.
///
/// Unknown emails and wrong passwords produce the same 401 response.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = AuthResponse),
        (status = 400, description = "Invalid request", body = FailureEnvelopeSchema),
        (status = 401, description = "Invalid credentials", body = FailureEnvelopeSchema),
        (status = 503, description = "Credential store unavailable", body = FailureEnvelopeSchema),
        (status = 500, description = "Internal server error", body = FailureEnvelopeSchema)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<AuthResponse>> {
    let form = payload.into_inner();
    let credentials =
        LoginCredentials::try_from_parts(&form.email, &form.password).map_err(map_login_error)?;

    let user = state.login.authenticate(&credentials).await?;
    Ok(web::Json(AuthResponse::ok(user)))
}

/// Choose the avatar of a user, replacing any previous choice.
#[utoipa::path(
    post,
    path = "/api/auth/set-avatar/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    request_body = SetAvatarRequest,
    responses(
        (status = 200, description = "Avatar stored", body = SetAvatarResponse),
        (status = 400, description = "Malformed id or empty image", body = FailureEnvelopeSchema),
        (status = 404, description = "Unknown user", body = FailureEnvelopeSchema),
        (status = 503, description = "Credential store unavailable", body = FailureEnvelopeSchema),
        (status = 500, description = "Internal server error", body = FailureEnvelopeSchema)
    ),
    tags = ["auth"],
    operation_id = "setAvatar"
)]
#[post("/set-avatar/{id}")]
pub async fn set_avatar(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<SetAvatarRequest>,
) -> ApiResult<web::Json<SetAvatarResponse>> {
    let user_id = parse_user_id(&path.into_inner(), FieldName::new("id"))?;
    let image = AvatarImage::new(payload.into_inner().image).map_err(map_avatar_error)?;

    let avatar = state.avatars.set_avatar(&user_id, image).await?;
    Ok(web::Json(SetAvatarResponse {
        is_set: avatar.is_set(),
        image: avatar.image().to_owned(),
    }))
}
