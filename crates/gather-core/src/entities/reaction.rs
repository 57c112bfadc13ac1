//! Reaction entity - an emoji reaction on a feed post

use chrono::{DateTime, Utc};

use crate::value_objects::{PostId, UserId};

/// Reaction row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostReaction {
    pub post_id: PostId,
    pub user_id: UserId,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}

impl PostReaction {
    /// Create a new PostReaction
    pub fn new(post_id: PostId, user_id: UserId, emoji: String) -> Self {
        Self {
            post_id,
            user_id,
            emoji,
            created_at: Utc::now(),
        }
    }

    /// Check if reaction uses a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: &str) -> bool {
        self.emoji == emoji
    }

    /// Check if the reaction was left by the given user
    #[inline]
    pub fn is_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
