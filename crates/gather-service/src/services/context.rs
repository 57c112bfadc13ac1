//! Service context - dependency container for services
//!
//! Holds the repositories the services read from. Everything is behind
//! `Arc<dyn Trait>` so tests can swap in in-memory implementations.

use std::sync::Arc;

use gather_core::traits::{
    CommunityRepository, EventRepository, MembershipRepository, PostRepository,
    ProfileRepository, ReactionRepository, RsvpRepository, SavedEventRepository,
};
use gather_db::{
    PgCommunityRepository, PgEventRepository, PgMembershipRepository, PgPool, PgPostRepository,
    PgProfileRepository, PgReactionRepository, PgRsvpRepository, PgSavedEventRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    profile_repo: Arc<dyn ProfileRepository>,
    event_repo: Arc<dyn EventRepository>,
    rsvp_repo: Arc<dyn RsvpRepository>,
    saved_event_repo: Arc<dyn SavedEventRepository>,
    post_repo: Arc<dyn PostRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    community_repo: Arc<dyn CommunityRepository>,
    membership_repo: Arc<dyn MembershipRepository>,
}

impl ServiceContext {
    /// Wire every repository to PostgreSQL
    pub fn from_pool(pool: &PgPool) -> Self {
        Self {
            profile_repo: Arc::new(PgProfileRepository::new(pool.clone())),
            event_repo: Arc::new(PgEventRepository::new(pool.clone())),
            rsvp_repo: Arc::new(PgRsvpRepository::new(pool.clone())),
            saved_event_repo: Arc::new(PgSavedEventRepository::new(pool.clone())),
            post_repo: Arc::new(PgPostRepository::new(pool.clone())),
            reaction_repo: Arc::new(PgReactionRepository::new(pool.clone())),
            community_repo: Arc::new(PgCommunityRepository::new(pool.clone())),
            membership_repo: Arc::new(PgMembershipRepository::new(pool.clone())),
        }
    }

    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    pub fn rsvp_repo(&self) -> &dyn RsvpRepository {
        self.rsvp_repo.as_ref()
    }

    pub fn saved_event_repo(&self) -> &dyn SavedEventRepository {
        self.saved_event_repo.as_ref()
    }

    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    pub fn community_repo(&self) -> &dyn CommunityRepository {
        self.community_repo.as_ref()
    }

    pub fn membership_repo(&self) -> &dyn MembershipRepository {
        self.membership_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext from individual repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    rsvp_repo: Option<Arc<dyn RsvpRepository>>,
    saved_event_repo: Option<Arc<dyn SavedEventRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    community_repo: Option<Arc<dyn CommunityRepository>>,
    membership_repo: Option<Arc<dyn MembershipRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn rsvp_repo(mut self, repo: Arc<dyn RsvpRepository>) -> Self {
        self.rsvp_repo = Some(repo);
        self
    }

    pub fn saved_event_repo(mut self, repo: Arc<dyn SavedEventRepository>) -> Self {
        self.saved_event_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn community_repo(mut self, repo: Arc<dyn CommunityRepository>) -> Self {
        self.community_repo = Some(repo);
        self
    }

    pub fn membership_repo(mut self, repo: Arc<dyn MembershipRepository>) -> Self {
        self.membership_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T: ?Sized>(repo: Option<Arc<T>>, name: &str) -> ServiceResult<Arc<T>> {
            repo.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            profile_repo: required(self.profile_repo, "profile_repo")?,
            event_repo: required(self.event_repo, "event_repo")?,
            rsvp_repo: required(self.rsvp_repo, "rsvp_repo")?,
            saved_event_repo: required(self.saved_event_repo, "saved_event_repo")?,
            post_repo: required(self.post_repo, "post_repo")?,
            reaction_repo: required(self.reaction_repo, "reaction_repo")?,
            community_repo: required(self.community_repo, "community_repo")?,
            membership_repo: required(self.membership_repo, "membership_repo")?,
        })
    }
}
