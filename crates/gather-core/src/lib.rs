//! # gather-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! compatibility matching logic.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod matching;
pub mod traits;
pub mod value_objects;
pub mod views;

// Re-export commonly used types at crate root
pub use entities::{
    Community, CommunityMembership, Event, EventStatus, MembershipRole, Post, PostReaction, Rsvp,
    SavedEvent, UserProfile,
};
pub use error::DomainError;
pub use matching::{
    attach_matches, location_similarity, matched_micro_meets, score, CompatibilityScorer,
    EventMatch, MatchResult, Matchable, ScoredEvent, MIN_MATCH_SCORE,
};
pub use traits::{
    CommunityRepository, EventQuery, EventRepository, MembershipRepository, PostQuery,
    PostRepository, ProfileRepository, ReactionRepository, RepoResult, RsvpRepository,
    SavedEventRepository,
};
pub use value_objects::{CommunityId, EventId, IdParseError, PostId, UserId};
pub use views::{EnrichedCommunity, EnrichedEvent, EnrichedPost};
