//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::IdentityService;
use crate::domain::ports::{
    AvatarService, LoginService, PasswordHasher, RegistrationService, UserRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Sign-up use-case.
    pub registration: Arc<dyn RegistrationService>,
    /// Credential check use-case.
    pub login: Arc<dyn LoginService>,
    /// Avatar selection use-case.
    pub avatars: Arc<dyn AvatarService>,
}

impl HttpState {
    /// Construct state from individual ports.
    pub fn new(
        registration: Arc<dyn RegistrationService>,
        login: Arc<dyn LoginService>,
        avatars: Arc<dyn AvatarService>,
    ) -> Self {
        Self {
            registration,
            login,
            avatars,
        }
    }

    /// Wire every port to a single [`IdentityService`].
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use chat_backend::inbound::http::state::HttpState;
    /// use chat_backend::outbound::crypto::BcryptPasswordHasher;
    /// use chat_backend::outbound::memory::InMemoryUserRepository;
    ///
    /// let state = HttpState::from_identity(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     Arc::new(BcryptPasswordHasher::default()),
    /// );
    /// let _login = state.login.clone();
    /// ```
    pub fn from_identity<R, H>(users: Arc<R>, hasher: Arc<H>) -> Self
    where
        R: UserRepository + 'static,
        H: PasswordHasher + 'static,
    {
        let service = Arc::new(IdentityService::new(users, hasher));
        Self {
            registration: service.clone(),
            login: service.clone(),
            avatars: service,
        }
    }
}
