//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Relation lookups take the whole batch of primary ids and must be served
//! by a single store query, whatever the batch size.

use async_trait::async_trait;

use crate::entities::{Community, Event, Post, PostReaction, UserProfile};
use crate::error::DomainError;
use crate::value_objects::{CommunityId, EventId, PostId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the matching profile of a user
    async fn find_by_id(&self, id: &UserId) -> RepoResult<Option<UserProfile>>;
}

// ============================================================================
// Event Repository
// ============================================================================

/// Filter options for event listings
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub category: Option<String>,
    pub micro_meets_only: bool,
    pub limit: i64,
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// List active events, soonest first
    async fn find_active(&self, query: &EventQuery) -> RepoResult<Vec<Event>>;

    /// Every active micro-meet, unpaginated
    async fn find_active_micro_meets(&self) -> RepoResult<Vec<Event>>;
}

// ============================================================================
// RSVP Repository
// ============================================================================

#[async_trait]
pub trait RsvpRepository: Send + Sync {
    /// Count RSVPs per event; events without RSVPs may be omitted
    async fn count_by_events(&self, event_ids: &[EventId]) -> RepoResult<Vec<(EventId, i64)>>;

    /// Subset of `event_ids` the user has RSVP'd to
    async fn find_joined(&self, event_ids: &[EventId], user_id: &UserId) -> RepoResult<Vec<EventId>>;
}

// ============================================================================
// Saved Event Repository
// ============================================================================

#[async_trait]
pub trait SavedEventRepository: Send + Sync {
    /// Subset of `event_ids` the user has saved
    async fn find_saved(&self, event_ids: &[EventId], user_id: &UserId) -> RepoResult<Vec<EventId>>;
}

// ============================================================================
// Post Repository
// ============================================================================

/// Pagination options for the feed
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub before: Option<PostId>,
    pub community_id: Option<CommunityId>,
    pub limit: i64,
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List posts newest first
    async fn find_recent(&self, query: &PostQuery) -> RepoResult<Vec<Post>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// All reaction rows on the given posts
    async fn find_by_posts(&self, post_ids: &[PostId]) -> RepoResult<Vec<PostReaction>>;
}

// ============================================================================
// Community Repository
// ============================================================================

#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// List communities by name
    async fn find_all(&self, limit: i64) -> RepoResult<Vec<Community>>;
}

// ============================================================================
// Membership Repository
// ============================================================================

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Count members per community; empty communities may be omitted
    async fn count_by_communities(
        &self,
        community_ids: &[CommunityId],
    ) -> RepoResult<Vec<(CommunityId, i64)>>;

    /// Subset of `community_ids` the user belongs to
    async fn find_joined(
        &self,
        community_ids: &[CommunityId],
        user_id: &UserId,
    ) -> RepoResult<Vec<CommunityId>>;
}
