//! Diesel table definitions for the credential store.
//!
//! Keep in sync with `backend/migrations`. The unique constraint names are
//! load-bearing: the repository maps them back to the colliding field.

diesel::table! {
    /// Registered accounts.
    ///
    /// `user_name` and `email` carry the `users_user_name_key` and
    /// `users_email_key` unique constraints.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique login handle (3 to 50 characters).
        user_name -> Varchar,
        /// Unique login email (at most 100 characters).
        email -> Varchar,
        /// bcrypt hash; the plaintext is never stored.
        password_hash -> Varchar,
        is_avatar_image_set -> Bool,
        /// Encoded image, empty until an avatar is chosen.
        avatar_image -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
