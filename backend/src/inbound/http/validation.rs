//! Shared validation helpers for inbound HTTP adapters.
//!
//! Domain validation errors are turned into `invalid_request` errors whose
//! details name the offending request field and a stable code.

use serde_json::json;

use crate::domain::{
    Error, LoginValidationError, RegistrationValidationError, UserId, UserValidationError,
};

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: &str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code,
    }))
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    Error::invalid_request(format!("{name} must be a valid UUID")).with_details(json!({
        "field": name,
        "value": value,
        "code": "invalid_uuid",
    }))
}

pub(crate) fn parse_user_id(value: &str, field: FieldName) -> Result<UserId, Error> {
    UserId::new(value).map_err(|_| invalid_uuid_error(field, value))
}

pub(crate) fn map_registration_error(err: RegistrationValidationError) -> Error {
    let field = FieldName::new(err.field());
    field_error(field, err.code(), err.to_string())
}

pub(crate) fn map_login_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyEmail => {
            field_error(FieldName::new("email"), "empty_email", err.to_string())
        }
    }
}

pub(crate) fn map_avatar_error(err: UserValidationError) -> Error {
    match err {
        UserValidationError::EmptyAvatarImage => {
            field_error(FieldName::new("image"), "empty_image", "image is required")
        }
        other => Error::invalid_request(other.to_string()),
    }
}
