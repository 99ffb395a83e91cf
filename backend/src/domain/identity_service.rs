//! Identity domain service.
//!
//! Implements the registration, login and avatar driving ports on top of the
//! [`UserRepository`] and [`PasswordHasher`] driven ports. Persistence
//! failures are translated into domain [`Error`] values here so inbound
//! adapters only ever see the public error envelope.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::OnceCell;
use tracing::{error, info, warn};

use crate::domain::ports::{
    AvatarService, LoginService, NewUserRecord, PasswordHasher, PasswordHasherError,
    RegistrationService, UserPersistenceError, UserRepository,
};
use crate::domain::{
    Avatar, AvatarImage, Error, LoginCredentials, PasswordHash, Registration, User, UserId,
};

/// Message returned for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Email or Password is incorrect";
/// Message returned when the requested user name is already held.
pub const USER_NAME_TAKEN_MESSAGE: &str = "Username already taken";
/// Message returned when the requested email is already held.
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already registered";
/// Message returned when an avatar targets an unknown user.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Hashed once per service and verified against when the email is unknown,
/// so both login failures cost one hash verification.
const DUMMY_PASSWORD: &str = "dummy-password-for-unknown-email";

/// Service backing the `/register`, `/login` and `/set-avatar` use-cases.
#[derive(Clone)]
pub struct IdentityService<R, H> {
    users: Arc<R>,
    hasher: Arc<H>,
    dummy_hash: Arc<OnceCell<PasswordHash>>,
}

impl<R, H> IdentityService<R, H> {
    /// Create a new service with the given repository and hasher.
    pub fn new(users: Arc<R>, hasher: Arc<H>) -> Self {
        Self {
            users,
            hasher,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }
}

impl<R, H> IdentityService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::UserNameTaken => Self::user_name_taken(),
            UserPersistenceError::EmailTaken => Self::email_taken(),
        }
    }

    fn map_hasher_error(error: PasswordHasherError) -> Error {
        Error::internal(error.to_string())
    }

    fn user_name_taken() -> Error {
        Error::conflict(USER_NAME_TAKEN_MESSAGE).with_details(json!({
            "field": "userName",
            "code": "username_taken",
        }))
    }

    fn email_taken() -> Error {
        Error::conflict(EMAIL_TAKEN_MESSAGE).with_details(json!({
            "field": "email",
            "code": "email_taken",
        }))
    }

    fn invalid_credentials() -> Error {
        Error::unauthorized(INVALID_CREDENTIALS_MESSAGE).with_details(json!({
            "code": "invalid_credentials",
        }))
    }

    fn user_not_found() -> Error {
        Error::not_found(USER_NOT_FOUND_MESSAGE).with_details(json!({
            "code": "user_not_found",
        }))
    }

    async fn ensure_available(&self, registration: &Registration) -> Result<(), Error> {
        let name_taken = self
            .users
            .user_name_exists(registration.user_name())
            .await
            .map_err(Self::map_persistence_error)?;
        if name_taken {
            return Err(Self::user_name_taken());
        }

        let email_taken = self
            .users
            .email_exists(registration.email())
            .await
            .map_err(Self::map_persistence_error)?;
        if email_taken {
            return Err(Self::email_taken());
        }
        Ok(())
    }

    async fn verify_against_dummy(&self, password: &str) {
        let outcome = match self
            .dummy_hash
            .get_or_try_init(|| self.hasher.hash(DUMMY_PASSWORD))
            .await
        {
            Ok(hash) => self.hasher.verify(password, hash).await.map(|_| ()),
            Err(err) => Err(err),
        };
        if let Err(err) = outcome {
            warn!(error = %err, "dummy password verification failed");
        }
    }
}

#[async_trait]
impl<R, H> RegistrationService for IdentityService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn register(&self, registration: &Registration) -> Result<User, Error> {
        // Early check gives the friendly message; the store's uniqueness
        // constraint still decides concurrent registrations.
        if let Err(err) = self.ensure_available(registration).await {
            warn!(code = ?err.code(), "registration rejected");
            return Err(err);
        }

        let password_hash = self
            .hasher
            .hash(registration.password())
            .await
            .map_err(|err| {
                error!(error = %err, "password hashing failed");
                Self::map_hasher_error(err)
            })?;

        let record = NewUserRecord {
            id: UserId::random(),
            user_name: registration.user_name().clone(),
            email: registration.email().clone(),
            password_hash,
        };

        let user = self.users.insert(&record).await.map_err(|err| {
            warn!(error = %err, "user insert failed");
            Self::map_persistence_error(err)
        })?;

        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }
}

#[async_trait]
impl<R, H> LoginService for IdentityService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let Some(stored) = self
            .users
            .find_credentials_by_email(credentials.email())
            .await
            .map_err(Self::map_persistence_error)?
        else {
            self.verify_against_dummy(credentials.password()).await;
            warn!("login rejected: unknown email");
            return Err(Self::invalid_credentials());
        };

        let matches = self
            .hasher
            .verify(credentials.password(), stored.password_hash())
            .await
            .map_err(|err| {
                error!(error = %err, user_id = %stored.user().id(), "password verification failed");
                Self::map_hasher_error(err)
            })?;
        if !matches {
            warn!(user_id = %stored.user().id(), "login rejected: password mismatch");
            return Err(Self::invalid_credentials());
        }

        let user = stored.into_user();
        info!(user_id = %user.id(), "user logged in");
        Ok(user)
    }
}

#[async_trait]
impl<R, H> AvatarService for IdentityService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn set_avatar(&self, user_id: &UserId, image: AvatarImage) -> Result<Avatar, Error> {
        let avatar = self
            .users
            .set_avatar(user_id, &image)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| {
                warn!(%user_id, "avatar rejected: unknown user");
                Self::user_not_found()
            })?;

        info!(%user_id, "avatar updated");
        Ok(avatar)
    }
}
