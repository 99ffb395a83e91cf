//! bcrypt-backed `PasswordHasher` adapter.
//!
//! bcrypt is CPU bound, so both operations run on the blocking thread pool.
//! The caller's trace identifier is carried across so log lines emitted on
//! the blocking thread still correlate with the request.

use std::ops::RangeInclusive;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{PasswordHasher, PasswordHasherError};
use crate::domain::{PasswordHash, TraceId};

/// Work factors bcrypt accepts.
const COST_RANGE: RangeInclusive<u32> = 4..=31;

/// Rejected bcrypt work factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("bcrypt cost must be between 4 and 31, got {0}")]
pub struct InvalidCost(pub u32);

/// [`PasswordHasher`] producing salted `$2b$` bcrypt hashes.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Work factor used unless configured otherwise.
    pub const DEFAULT_COST: u32 = 10;

    /// Create a hasher with the given work factor.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCost`] when `cost` is outside `4..=31`.
    pub fn new(cost: u32) -> Result<Self, InvalidCost> {
        if COST_RANGE.contains(&cost) {
            Ok(Self { cost })
        } else {
            Err(InvalidCost(cost))
        }
    }

    /// Configured work factor.
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self {
            cost: Self::DEFAULT_COST,
        }
    }
}

async fn run_blocking<F, T>(f: F) -> Result<T, String>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let trace_id = TraceId::current();
    tokio::task::spawn_blocking(move || match trace_id {
        Some(id) => TraceId::sync_scope(id, f),
        None => f(),
    })
    .await
    .map_err(|err| err.to_string())
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHasherError> {
        let cost = self.cost;
        let password = zeroize::Zeroizing::new(password.to_owned());
        let encoded = run_blocking(move || {
            debug!(cost, "hashing password");
            bcrypt::hash(password.as_bytes(), cost)
        })
        .await
        .map_err(PasswordHasherError::hash)?
        .map_err(|err| PasswordHasherError::hash(err.to_string()))?;

        PasswordHash::new(encoded)
            .ok_or_else(|| PasswordHasherError::hash("bcrypt returned an empty hash"))
    }

    async fn verify(
        &self,
        password: &str,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        let password = zeroize::Zeroizing::new(password.to_owned());
        let encoded = hash.as_str().to_owned();
        run_blocking(move || bcrypt::verify(password.as_bytes(), &encoded))
            .await
            .map_err(PasswordHasherError::verify)?
            .map_err(|err| PasswordHasherError::verify(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::new(4).expect("minimum cost is valid")
    }

    #[rstest]
    #[case(3)]
    #[case(32)]
    fn rejects_out_of_range_cost(#[case] cost: u32) {
        assert_eq!(BcryptPasswordHasher::new(cost).unwrap_err(), InvalidCost(cost));
    }

    #[rstest]
    fn default_cost_is_ten() {
        assert_eq!(BcryptPasswordHasher::default().cost(), 10);
    }

    #[rstest]
    #[tokio::test]
    async fn hash_is_salted_and_verifies(hasher: BcryptPasswordHasher) {
        let first = hasher.hash("longpass1").await.expect("hash");
        let second = hasher.hash("longpass1").await.expect("hash");

        assert_ne!(first.as_str(), "longpass1");
        assert!(first.as_str().starts_with("$2"));
        assert_ne!(first, second, "each hash gets its own salt");
        assert!(hasher.verify("longpass1", &first).await.expect("verify"));
    }

    #[rstest]
    #[tokio::test]
    async fn wrong_password_does_not_verify(hasher: BcryptPasswordHasher) {
        let hash = hasher.hash("longpass1").await.expect("hash");

        assert!(!hasher.verify("longpass2", &hash).await.expect("verify"));
        assert!(!hasher.verify("", &hash).await.expect("verify"));
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_hash_is_an_error(hasher: BcryptPasswordHasher) {
        let bogus = PasswordHash::new("not-a-bcrypt-hash").expect("non-empty");
        let err = hasher.verify("longpass1", &bogus).await.expect_err("malformed");
        assert!(matches!(err, PasswordHasherError::Verify { .. }));
    }
}
