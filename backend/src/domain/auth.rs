//! Login credentials.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use zeroize::Zeroizing;

use super::user::{EmailAddress, UserValidationError};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email is required")]
    EmptyEmail,
}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `email` is trimmed and non-empty.
/// - `password` is kept verbatim (including blanks); a wrong or empty
///   password is an authentication failure, not a validation failure.
///
/// # Examples
/// ```
/// use chat_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" b@x.com ", "longpass1").unwrap();
/// assert_eq!(creds.email().as_ref(), "b@x.com");
/// assert_eq!(creds.password(), "longpass1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        // Over-long addresses cannot exist in the store; let them fail
        // authentication instead of revealing the length rule.
        let email = match EmailAddress::new(email) {
            Ok(email) => email,
            Err(UserValidationError::EmptyEmail) => return Err(LoginValidationError::EmptyEmail),
            Err(_) => EmailAddress::unchecked(email.trim()),
        };

        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used to look up the account.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
