//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Uniqueness of `user_name` and `email` is enforced by table constraints, so
//! the insert itself is the authoritative check for concurrent registrations.

use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{NewUserRecord, UserPersistenceError, UserRepository};
use crate::domain::{
    Avatar, AvatarImage, EmailAddress, PasswordHash, User, UserCredentials, UserId, UserName,
};

use super::models::{AvatarUpdate, NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;
use super::user_error_mapping::{map_diesel_error, map_pool_error};

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn corrupted(field: &str, err: impl std::fmt::Display) -> UserPersistenceError {
    UserPersistenceError::query(format!("corrupted {field} in database: {err}"))
}

fn row_to_user(row: &UserRow) -> Result<User, UserPersistenceError> {
    let user_name = UserName::new(&row.user_name).map_err(|err| corrupted("user name", err))?;
    let email = EmailAddress::new(&row.email).map_err(|err| corrupted("email", err))?;
    let avatar = Avatar::from_stored(row.is_avatar_image_set, row.avatar_image.clone());
    Ok(User::new(UserId::from_uuid(row.id), user_name, email, avatar))
}

fn row_to_credentials(row: UserRow) -> Result<UserCredentials, UserPersistenceError> {
    let user = row_to_user(&row)?;
    let password_hash = PasswordHash::new(row.password_hash)
        .ok_or_else(|| corrupted("password hash", "empty value"))?;
    Ok(UserCredentials::new(user, password_hash))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, record: &NewUserRecord) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            id: *record.id.as_uuid(),
            user_name: record.user_name.as_ref(),
            email: record.email.as_ref(),
            password_hash: record.password_hash.as_str(),
        };

        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_user(&row)
    }

    async fn user_name_exists(&self, user_name: &UserName) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(exists(
            users::table.filter(users::user_name.eq(user_name.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn email_exists(&self, email: &EmailAddress) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(exists(users::table.filter(users::email.eq(email.as_ref()))))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn find_credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserCredentials>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_credentials).transpose()
    }

    async fn set_avatar(
        &self,
        id: &UserId,
        image: &AvatarImage,
    ) -> Result<Option<Avatar>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let update = AvatarUpdate {
            is_avatar_image_set: true,
            avatar_image: image.as_ref(),
            updated_at: Utc::now(),
        };

        let stored: Option<(bool, String)> = diesel::update(users::table.find(id.as_uuid()))
            .set(&update)
            .returning((users::is_avatar_image_set, users::avatar_image))
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(stored.map(|(is_set, image)| Avatar::from_stored(is_set, image)))
    }
}
