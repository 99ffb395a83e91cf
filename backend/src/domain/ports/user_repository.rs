//! Driven port for the credential store and its errors.
//!
//! Adapters must enforce user name and email uniqueness atomically on insert
//! and report collisions through the dedicated error variants, so two
//! concurrent registrations can never both succeed.

use async_trait::async_trait;

use crate::domain::{
    Avatar, AvatarImage, EmailAddress, PasswordHash, User, UserCredentials, UserId, UserName,
};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by credential store adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another user already holds the requested user name.
        UserNameTaken => "user name already taken",
        /// Another user already holds the requested email.
        EmailTaken => "email already registered",
    }
}

/// Everything needed to persist a newly registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub id: UserId,
    pub user_name: UserName,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
}

/// Port for reading and writing user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user with an unset avatar.
    ///
    /// Fails with [`UserPersistenceError::UserNameTaken`] or
    /// [`UserPersistenceError::EmailTaken`] when a uniqueness constraint
    /// rejects the write.
    async fn insert(&self, record: &NewUserRecord) -> Result<User, UserPersistenceError>;

    /// Whether any user holds this user name.
    async fn user_name_exists(&self, user_name: &UserName) -> Result<bool, UserPersistenceError>;

    /// Whether any user holds this email.
    async fn email_exists(&self, email: &EmailAddress) -> Result<bool, UserPersistenceError>;

    /// Fetch a user together with its password hash by login email.
    async fn find_credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserCredentials>, UserPersistenceError>;

    /// Mark the avatar as set and store the image.
    ///
    /// Returns `None` when no user has this identifier.
    async fn set_avatar(
        &self,
        id: &UserId,
        image: &AvatarImage,
    ) -> Result<Option<Avatar>, UserPersistenceError>;
}
