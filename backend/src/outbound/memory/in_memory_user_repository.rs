//! In-memory `UserRepository` for development and tests.
//!
//! All state sits behind one lock, so the uniqueness check and the insert in
//! [`UserRepository::insert`] happen atomically. Data is lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{NewUserRecord, UserPersistenceError, UserRepository};
use crate::domain::{
    Avatar, AvatarImage, EmailAddress, User, UserCredentials, UserId, UserName,
};

#[derive(Default)]
struct Store {
    users: HashMap<UserId, UserCredentials>,
    by_user_name: HashMap<UserName, UserId>,
    by_email: HashMap<EmailAddress, UserId>,
}

/// Volatile credential store keyed by id, user name and email.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, record: &NewUserRecord) -> Result<User, UserPersistenceError> {
        let mut store = self.store.write().await;

        if store.by_user_name.contains_key(&record.user_name) {
            return Err(UserPersistenceError::user_name_taken());
        }
        if store.by_email.contains_key(&record.email) {
            return Err(UserPersistenceError::email_taken());
        }
        if store.users.contains_key(&record.id) {
            return Err(UserPersistenceError::query("duplicate user id"));
        }

        let user = User::new(
            record.id,
            record.user_name.clone(),
            record.email.clone(),
            Avatar::unset(),
        );
        store
            .by_user_name
            .insert(record.user_name.clone(), record.id);
        store.by_email.insert(record.email.clone(), record.id);
        store.users.insert(
            record.id,
            UserCredentials::new(user.clone(), record.password_hash.clone()),
        );
        Ok(user)
    }

    async fn user_name_exists(&self, user_name: &UserName) -> Result<bool, UserPersistenceError> {
        Ok(self.store.read().await.by_user_name.contains_key(user_name))
    }

    async fn email_exists(&self, email: &EmailAddress) -> Result<bool, UserPersistenceError> {
        Ok(self.store.read().await.by_email.contains_key(email))
    }

    async fn find_credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserCredentials>, UserPersistenceError> {
        let store = self.store.read().await;
        Ok(store
            .by_email
            .get(email)
            .and_then(|id| store.users.get(id))
            .cloned())
    }

    async fn set_avatar(
        &self,
        id: &UserId,
        image: &AvatarImage,
    ) -> Result<Option<Avatar>, UserPersistenceError> {
        let mut store = self.store.write().await;
        let Some(entry) = store.users.get_mut(id) else {
            return Ok(None);
        };

        let avatar = Avatar::with_image(image.clone());
        let mut user = entry.user().clone();
        user.set_avatar(avatar.clone());
        *entry = UserCredentials::new(user, entry.password_hash().clone());
        Ok(Some(avatar))
    }
}
