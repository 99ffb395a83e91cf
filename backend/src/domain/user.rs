//! User data model.
//!
//! A [`User`] is the outward-facing view of a registered identity: it never
//! carries the password hash. The hash travels separately in
//! [`UserCredentials`], which only the login flow reads.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum allowed length for a user name, in characters.
pub const USER_NAME_MIN: usize = 3;
/// Maximum allowed length for a user name, in characters.
pub const USER_NAME_MAX: usize = 50;
/// Maximum allowed length for an email address, in characters.
pub const EMAIL_MAX: usize = 100;

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("user id must not be empty")]
    EmptyId,
    #[error("user id must be a valid UUID")]
    InvalidId,
    #[error("username should be greater than {min} characters")]
    UserNameTooShort { min: usize },
    #[error("username must be at most {max} characters")]
    UserNameTooLong { max: usize },
    #[error("email is required")]
    EmptyEmail,
    #[error("email must be at most {max} characters")]
    EmailTooLong { max: usize },
    #[error("avatar image must not be empty")]
    EmptyAvatarImage,
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from its textual form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, typically one read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unique public handle chosen at registration.
///
/// ## Invariants
/// - Stored trimmed.
/// - Between [`USER_NAME_MIN`] and [`USER_NAME_MAX`] characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(user_name: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = user_name.as_ref().trim();
        let length = trimmed.chars().count();
        if length < USER_NAME_MIN {
            return Err(UserValidationError::UserNameTooShort {
                min: USER_NAME_MIN,
            });
        }
        if length > USER_NAME_MAX {
            return Err(UserValidationError::UserNameTooLong {
                max: USER_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Email address used as the login key.
///
/// Only presence and length are checked; the address is stored trimmed but
/// otherwise exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = email.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if trimmed.chars().count() > EMAIL_MAX {
            return Err(UserValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Wrap a non-empty address without the length rule; lookups only.
    pub(crate) fn unchecked(email: &str) -> Self {
        Self(email.to_owned())
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Pre-encoded avatar image payload (base64 image data).
#[derive(Clone, PartialEq, Eq)]
pub struct AvatarImage(String);

impl AvatarImage {
    /// Validate and construct an [`AvatarImage`].
    pub fn new(image: impl Into<String>) -> Result<Self, UserValidationError> {
        let image = image.into();
        if image.trim().is_empty() {
            return Err(UserValidationError::EmptyAvatarImage);
        }
        Ok(Self(image))
    }
}

impl AsRef<str> for AvatarImage {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

// Payloads are large; keep log lines readable.
impl fmt::Debug for AvatarImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AvatarImage({} bytes)", self.0.len())
    }
}

/// Avatar state of a user.
///
/// `is_set()` holds exactly when an image is present, so the
/// `isAvatarImageSet`/`avatarImage` pair can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Avatar {
    image: Option<AvatarImage>,
}

impl Avatar {
    /// Avatar state of a freshly registered user.
    pub fn unset() -> Self {
        Self::default()
    }

    /// Avatar state after an image was chosen.
    pub fn with_image(image: AvatarImage) -> Self {
        Self { image: Some(image) }
    }

    /// Rebuild avatar state from its stored `(is_set, image)` columns.
    ///
    /// A set flag without image data is treated as unset.
    pub fn from_stored(is_set: bool, image: String) -> Self {
        if !is_set {
            return Self::unset();
        }
        AvatarImage::new(image)
            .map(Self::with_image)
            .unwrap_or_default()
    }

    /// Whether an avatar image has been chosen.
    pub fn is_set(&self) -> bool {
        self.image.is_some()
    }

    /// Encoded image, or an empty string when unset.
    pub fn image(&self) -> &str {
        self.image.as_ref().map_or("", AvatarImage::as_ref)
    }
}

/// Application user as exposed to clients.
///
/// ## Invariants
/// - Never contains password material.
///
/// Serialises as
/// `{"id", "userName", "email", "isAvatarImageSet", "avatarImage"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    user_name: UserName,
    email: EmailAddress,
    avatar: Avatar,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(id: UserId, user_name: UserName, email: EmailAddress, avatar: Avatar) -> Self {
        Self {
            id,
            user_name,
            email,
            avatar,
        }
    }

    /// Fallible constructor from raw strings, used by tests and storage mapping.
    pub fn try_from_strings(
        id: impl AsRef<str>,
        user_name: impl AsRef<str>,
        email: impl AsRef<str>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserId::new(id)?,
            UserName::new(user_name)?,
            EmailAddress::new(email)?,
            Avatar::unset(),
        ))
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Public user name.
    pub fn user_name(&self) -> &UserName {
        &self.user_name
    }

    /// Login email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Current avatar state.
    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    /// Replace the avatar state.
    pub fn set_avatar(&mut self, avatar: Avatar) {
        self.avatar = avatar;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: String,
    user_name: String,
    email: String,
    #[serde(default)]
    is_avatar_image_set: bool,
    #[serde(default)]
    avatar_image: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            user_name,
            email,
            avatar,
        } = value;
        Self {
            id: id.into(),
            user_name: user_name.into(),
            email: email.into(),
            is_avatar_image_set: avatar.is_set(),
            avatar_image: avatar.image().to_owned(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let mut user = User::try_from_strings(value.id, value.user_name, value.email)?;
        user.set_avatar(Avatar::from_stored(
            value.is_avatar_image_set,
            value.avatar_image,
        ));
        Ok(user)
    }
}

/// Salted one-way password hash as stored by the credential store.
///
/// The contents are never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash string (for example a `$2b$…` bcrypt string).
    pub fn new(encoded: impl Into<String>) -> Option<Self> {
        let encoded = encoded.into();
        (!encoded.is_empty()).then_some(Self(encoded))
    }

    /// Encoded hash string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// A stored user together with its password hash.
///
/// Only the login flow reads this; everything else works with [`User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    user: User,
    password_hash: PasswordHash,
}

impl UserCredentials {
    /// Pair a user with its stored password hash.
    pub fn new(user: User, password_hash: PasswordHash) -> Self {
        Self {
            user,
            password_hash,
        }
    }

    /// The stored user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The stored password hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Drop the hash and keep the outward-facing user.
    pub fn into_user(self) -> User {
        self.user
    }
}

#[cfg(test)]
mod tests;
