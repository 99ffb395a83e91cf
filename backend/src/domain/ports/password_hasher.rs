//! Driven port for salted one-way password hashing.

use async_trait::async_trait;

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Failures raised by password hashing adapters.
    pub enum PasswordHasherError {
        /// Deriving a hash from a plaintext failed.
        Hash { message: String } => "password hashing failed: {message}",
        /// A stored hash could not be compared (for example it is malformed).
        Verify { message: String } => "password verification failed: {message}",
    }
}

/// Port for deriving and checking password hashes.
///
/// Hashes are compared, never reversed: `verify(p, hash(p))` is `true` while
/// the hash itself never equals `p`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Derive a salted hash for `password`.
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHasherError>;

    /// Check `password` against a stored hash.
    async fn verify(
        &self,
        password: &str,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError>;
}
