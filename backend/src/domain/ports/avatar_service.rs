//! Driving port for choosing a profile avatar.

use async_trait::async_trait;

use crate::domain::{Avatar, AvatarImage, Error, UserId};

/// Domain use-case port for avatar selection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvatarService: Send + Sync {
    /// Store `image` as the avatar of `user_id`, replacing any previous one.
    async fn set_avatar(&self, user_id: &UserId, image: AvatarImage) -> Result<Avatar, Error>;
}
