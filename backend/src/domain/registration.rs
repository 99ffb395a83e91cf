//! Registration requests.
//!
//! All of the sign-up form rules are enforced here, so a client that skips
//! its own checks still cannot create an invalid account.

use zeroize::Zeroizing;

use super::user::{EmailAddress, UserName, UserValidationError};

/// Minimum password length, in characters.
pub const PASSWORD_MIN: usize = 8;

/// Validation failures for a registration form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationValidationError {
    #[error("password and confirm password should be same")]
    PasswordMismatch,
    #[error("username should be greater than {min} characters")]
    UserNameTooShort { min: usize },
    #[error("username must be at most {max} characters")]
    UserNameTooLong { max: usize },
    #[error("password should be equal or greater than {min} characters")]
    PasswordTooShort { min: usize },
    #[error("email is required")]
    EmptyEmail,
    #[error("email must be at most {max} characters")]
    EmailTooLong { max: usize },
    #[error("{field} is invalid: {source}")]
    InvalidField {
        field: &'static str,
        source: UserValidationError,
    },
}

impl RegistrationValidationError {
    /// Request field the failure refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::PasswordMismatch => "confirmPassword",
            Self::UserNameTooShort { .. } | Self::UserNameTooLong { .. } => "userName",
            Self::PasswordTooShort { .. } => "password",
            Self::EmptyEmail | Self::EmailTooLong { .. } => "email",
            Self::InvalidField { field, .. } => field,
        }
    }

    /// Stable machine-readable code for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::PasswordMismatch => "password_mismatch",
            Self::UserNameTooShort { .. } => "user_name_too_short",
            Self::UserNameTooLong { .. } => "user_name_too_long",
            Self::PasswordTooShort { .. } => "password_too_short",
            Self::EmptyEmail => "empty_email",
            Self::EmailTooLong { .. } => "email_too_long",
            Self::InvalidField { .. } => "invalid_value",
        }
    }

    fn from_user_name(err: UserValidationError) -> Self {
        match err {
            UserValidationError::UserNameTooShort { min } => Self::UserNameTooShort { min },
            UserValidationError::UserNameTooLong { max } => Self::UserNameTooLong { max },
            source => Self::InvalidField {
                field: "userName",
                source,
            },
        }
    }

    fn from_email(err: UserValidationError) -> Self {
        match err {
            UserValidationError::EmptyEmail => Self::EmptyEmail,
            UserValidationError::EmailTooLong { max } => Self::EmailTooLong { max },
            source => Self::InvalidField {
                field: "email",
                source,
            },
        }
    }
}

/// A validated sign-up form.
///
/// ## Invariants
/// - `password` matched its confirmation and meets the minimum length.
/// - `user_name` and `email` satisfy their value-type rules.
///
/// # Examples
/// ```
/// use chat_backend::domain::Registration;
///
/// let registration =
///     Registration::try_from_parts("bob", "b@x.com", "longpass1", "longpass1").unwrap();
/// assert_eq!(registration.user_name().as_ref(), "bob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    user_name: UserName,
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl Registration {
    /// Validate raw form values.
    ///
    /// Rules are checked in the order the sign-up form reports them:
    /// confirmation, user name, password length, then email.
    pub fn try_from_parts(
        user_name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self, RegistrationValidationError> {
        if password != confirm_password {
            return Err(RegistrationValidationError::PasswordMismatch);
        }

        let user_name =
            UserName::new(user_name).map_err(RegistrationValidationError::from_user_name)?;

        if password.chars().count() < PASSWORD_MIN {
            return Err(RegistrationValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }

        let email = EmailAddress::new(email).map_err(RegistrationValidationError::from_email)?;

        Ok(Self {
            user_name,
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Requested user name.
    pub fn user_name(&self) -> &UserName {
        &self.user_name
    }

    /// Requested login email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Plaintext password, to be hashed before storage.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
