//! Database models - SQLx-compatible structs for PostgreSQL tables

mod community;
mod event;
mod post;
mod profile;

pub use community::{CommunityModel, MemberCountModel};
pub use event::{AttendeeCountModel, EventModel};
pub use post::{PostModel, PostReactionModel};
pub use profile::ProfileModel;
