//! Domain entities - core business objects

mod community;
mod event;
mod post;
mod reaction;
mod rsvp;
mod user;

pub use community::{Community, CommunityMembership, MembershipRole};
pub use event::{Event, EventStatus, DEFAULT_MAX_SPOTS};
pub use post::Post;
pub use reaction::PostReaction;
pub use rsvp::{Rsvp, SavedEvent};
pub use user::UserProfile;
