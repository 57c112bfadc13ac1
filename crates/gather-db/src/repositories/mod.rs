//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in gather-core.

mod community;
mod error;
mod event;
mod membership;
mod post;
mod profile;
mod reaction;
mod rsvp;

pub use community::PgCommunityRepository;
pub use event::PgEventRepository;
pub use membership::PgMembershipRepository;
pub use post::PgPostRepository;
pub use profile::PgProfileRepository;
pub use reaction::PgReactionRepository;
pub use rsvp::{PgRsvpRepository, PgSavedEventRepository};
