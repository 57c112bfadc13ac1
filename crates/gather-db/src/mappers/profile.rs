//! Profile model -> entity mapper

use gather_core::entities::UserProfile;
use gather_core::value_objects::UserId;

use crate::models::ProfileModel;

impl From<ProfileModel> for UserProfile {
    fn from(model: ProfileModel) -> Self {
        UserProfile {
            id: UserId::new(model.id),
            location: model.location,
            interests: model.interests,
            is_pro: model.is_pro,
        }
    }
}
