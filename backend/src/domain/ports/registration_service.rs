//! Driving port for account creation.

use async_trait::async_trait;

use crate::domain::{Error, Registration, User};

/// Domain use-case port for registering users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Create an account from a validated sign-up form.
    async fn register(&self, registration: &Registration) -> Result<User, Error>;
}
