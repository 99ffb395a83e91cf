//! Internal Diesel row structs for the users table.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub is_avatar_image_set: bool,
    pub avatar_image: String,
}

/// Insertable struct for registering a user. Avatar columns take their
/// defaults (unset, empty image).
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub user_name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Changeset applied when a user picks an avatar.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct AvatarUpdate<'a> {
    pub is_avatar_image_set: bool,
    pub avatar_image: &'a str,
    pub updated_at: DateTime<Utc>,
}
