//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommunityRepository, EventQuery, EventRepository, MembershipRepository, PostQuery,
    PostRepository, ProfileRepository, ReactionRepository, RepoResult, RsvpRepository,
    SavedEventRepository,
};
