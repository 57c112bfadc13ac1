//! Community model -> entity mapper

use gather_core::entities::Community;
use gather_core::value_objects::{CommunityId, UserId};

use crate::models::CommunityModel;

impl From<CommunityModel> for Community {
    fn from(model: CommunityModel) -> Self {
        Community {
            id: CommunityId::new(model.id),
            owner_id: UserId::new(model.owner_id),
            name: model.name,
            description: model.description,
            category: model.category,
            created_at: model.created_at,
        }
    }
}
