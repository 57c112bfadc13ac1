//! Post entity - an entry in the social feed

use chrono::{DateTime, Utc};

use crate::value_objects::{CommunityId, PostId, UserId};

/// Feed post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub community_id: Option<CommunityId>,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new top-level post
    pub fn new(id: PostId, author_id: UserId, content: String) -> Self {
        Self {
            id,
            author_id,
            community_id: None,
            content,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    /// Check if the post was made inside a community
    #[inline]
    pub fn is_community_post(&self) -> bool {
        self.community_id.is_some()
    }
}
