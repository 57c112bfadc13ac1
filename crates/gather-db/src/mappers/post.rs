//! Post and reaction model -> entity mappers

use gather_core::entities::{Post, PostReaction};
use gather_core::value_objects::{CommunityId, PostId, UserId};

use crate::models::{PostModel, PostReactionModel};

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::new(model.id),
            author_id: UserId::new(model.author_id),
            community_id: model.community_id.map(CommunityId::new),
            content: model.content,
            image_url: model.image_url,
            created_at: model.created_at,
        }
    }
}

impl From<PostReactionModel> for PostReaction {
    fn from(model: PostReactionModel) -> Self {
        PostReaction {
            post_id: PostId::new(model.post_id),
            user_id: UserId::new(model.user_id),
            emoji: model.emoji,
            created_at: model.created_at,
        }
    }
}
