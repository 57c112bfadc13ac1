//! Test fixtures and data generators
//!
//! `InMemoryStore` implements every repository port over plain vectors,
//! counts each lookup it serves and can fail all lookups or just one kind.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use gather_core::{
    Community, CommunityId, CommunityMembership, CommunityRepository, DomainError, Event, EventId,
    EventQuery, EventRepository, EventStatus, MembershipRepository, MembershipRole, Post, PostId,
    PostQuery, PostReaction, PostRepository, ProfileRepository, ReactionRepository, RepoResult,
    Rsvp, RsvpRepository, SavedEvent, SavedEventRepository, UserId, UserProfile,
};
use gather_service::ServiceContext;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Builders
// ============================================================================

/// Profile with the given interests and no location
pub fn profile(id: &str, interests: &[&str]) -> UserProfile {
    let mut profile = UserProfile::new(UserId::new(id));
    profile.interests = interests.iter().map(ToString::to_string).collect();
    profile
}

/// Active regular event with no price, date or location
pub fn event(id: &str, category: &str) -> Event {
    Event::new(
        EventId::new(id),
        UserId::new("host-1"),
        format!("{category} gathering"),
        category.to_string(),
    )
}

/// Active micro-meet for a large group with no price and no date
pub fn micro_meet(id: &str, category: &str) -> Event {
    let mut event = event(id, category);
    event.is_micro_meet = true;
    event.max_spots = Some(20);
    event
}

/// `YYYY-MM-DD` date `days` from today (UTC)
pub fn date_in(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

/// Post created `age_minutes` ago
pub fn post(id: &str, author: &str, age_minutes: i64) -> Post {
    let mut post = Post::new(PostId::new(id), UserId::new(author), format!("post {id}"));
    post.created_at = Utc::now() - Duration::minutes(age_minutes);
    post
}

pub fn community(id: &str, name: &str) -> Community {
    Community::new(CommunityId::new(id), UserId::new("owner-1"), name.to_string())
}

// ============================================================================
// In-memory store
// ============================================================================

/// One repository method of the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    Profile,
    ActiveEvents,
    ActiveMicroMeets,
    RsvpCounts,
    RsvpJoined,
    SavedEvents,
    RecentPosts,
    Reactions,
    Communities,
    MemberCounts,
    MemberJoined,
}

/// Repository fake backed by vectors
#[derive(Debug, Default)]
pub struct InMemoryStore {
    profiles: Vec<UserProfile>,
    events: Vec<Event>,
    rsvps: Vec<Rsvp>,
    saved: Vec<SavedEvent>,
    posts: Vec<Post>,
    reactions: Vec<PostReaction>,
    communities: Vec<Community>,
    memberships: Vec<CommunityMembership>,
    calls: AtomicUsize,
    failing: AtomicBool,
    failing_only: Mutex<HashSet<Lookup>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profiles.push(profile);
        self
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn with_rsvp(mut self, event_id: &str, user_id: &str) -> Self {
        self.rsvps
            .push(Rsvp::new(EventId::new(event_id), UserId::new(user_id)));
        self
    }

    pub fn with_saved(mut self, event_id: &str, user_id: &str) -> Self {
        self.saved
            .push(SavedEvent::new(EventId::new(event_id), UserId::new(user_id)));
        self
    }

    pub fn with_post(mut self, post: Post) -> Self {
        self.posts.push(post);
        self
    }

    pub fn with_reaction(mut self, post_id: &str, user_id: &str, emoji: &str) -> Self {
        self.reactions.push(PostReaction::new(
            PostId::new(post_id),
            UserId::new(user_id),
            emoji.to_string(),
        ));
        self
    }

    pub fn with_community(mut self, community: Community) -> Self {
        self.communities.push(community);
        self
    }

    pub fn with_member(mut self, community_id: &str, user_id: &str) -> Self {
        self.memberships.push(CommunityMembership {
            community_id: CommunityId::new(community_id),
            user_id: UserId::new(user_id),
            role: MembershipRole::Member,
            joined_at: Utc::now(),
        });
        self
    }

    /// Store lookups served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn reset_calls(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }

    /// Make every following lookup fail with a database error
    pub fn fail_lookups(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Make only `lookup` fail; every other port keeps answering
    pub fn fail_lookup(&self, lookup: Lookup) {
        self.failing_only
            .lock()
            .expect("failure set lock poisoned")
            .insert(lookup);
    }

    /// Wrap in an `Arc` and wire it into a service context
    pub fn into_context(self) -> (Arc<Self>, ServiceContext) {
        let store = Arc::new(self);
        let context = context_for(&store);
        (store, context)
    }

    fn lookup(&self, lookup: Lookup) -> RepoResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let singled_out = self
            .failing_only
            .lock()
            .expect("failure set lock poisoned")
            .contains(&lookup);
        if singled_out || self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "connection refused (simulated)".to_string(),
            ));
        }
        Ok(())
    }
}

/// Build a service context whose repositories all read from `store`
pub fn context_for(store: &Arc<InMemoryStore>) -> ServiceContext {
    ServiceContext::builder()
        .profile_repo(store.clone())
        .event_repo(store.clone())
        .rsvp_repo(store.clone())
        .saved_event_repo(store.clone())
        .post_repo(store.clone())
        .reaction_repo(store.clone())
        .community_repo(store.clone())
        .membership_repo(store.clone())
        .build()
        .expect("every repository is provided")
}

fn clamp_limit(limit: i64) -> usize {
    usize::try_from(limit.clamp(1, 100)).unwrap_or(1)
}

fn tally<K: Clone + Eq + std::hash::Hash>(keys: impl Iterator<Item = K>) -> Vec<(K, i64)> {
    let mut counts: HashMap<K, i64> = HashMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }
    counts.into_iter().collect()
}

#[async_trait]
impl ProfileRepository for InMemoryStore {
    async fn find_by_id(&self, id: &UserId) -> RepoResult<Option<UserProfile>> {
        self.lookup(Lookup::Profile)?;
        Ok(self.profiles.iter().find(|p| &p.id == id).cloned())
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn find_active(&self, query: &EventQuery) -> RepoResult<Vec<Event>> {
        self.lookup(Lookup::ActiveEvents)?;
        Ok(self
            .events
            .iter()
            .filter(|e| e.status == EventStatus::Active)
            .filter(|e| !query.micro_meets_only || e.is_micro_meet)
            .filter(|e| {
                query
                    .category
                    .as_deref()
                    .map_or(true, |c| e.category.eq_ignore_ascii_case(c))
            })
            .take(clamp_limit(query.limit))
            .cloned()
            .collect())
    }

    async fn find_active_micro_meets(&self) -> RepoResult<Vec<Event>> {
        self.lookup(Lookup::ActiveMicroMeets)?;
        Ok(self
            .events
            .iter()
            .filter(|e| e.status == EventStatus::Active && e.is_micro_meet)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RsvpRepository for InMemoryStore {
    async fn count_by_events(&self, event_ids: &[EventId]) -> RepoResult<Vec<(EventId, i64)>> {
        self.lookup(Lookup::RsvpCounts)?;
        Ok(tally(
            self.rsvps
                .iter()
                .filter(|r| event_ids.contains(&r.event_id))
                .map(|r| r.event_id.clone()),
        ))
    }

    async fn find_joined(&self, event_ids: &[EventId], user_id: &UserId) -> RepoResult<Vec<EventId>> {
        self.lookup(Lookup::RsvpJoined)?;
        Ok(self
            .rsvps
            .iter()
            .filter(|r| &r.user_id == user_id && event_ids.contains(&r.event_id))
            .map(|r| r.event_id.clone())
            .collect())
    }
}

#[async_trait]
impl SavedEventRepository for InMemoryStore {
    async fn find_saved(&self, event_ids: &[EventId], user_id: &UserId) -> RepoResult<Vec<EventId>> {
        self.lookup(Lookup::SavedEvents)?;
        Ok(self
            .saved
            .iter()
            .filter(|s| &s.user_id == user_id && event_ids.contains(&s.event_id))
            .map(|s| s.event_id.clone())
            .collect())
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn find_recent(&self, query: &PostQuery) -> RepoResult<Vec<Post>> {
        self.lookup(Lookup::RecentPosts)?;

        let mut posts: Vec<&Post> = self
            .posts
            .iter()
            .filter(|p| {
                query
                    .community_id
                    .as_ref()
                    .map_or(true, |c| p.community_id.as_ref() == Some(c))
            })
            .collect();
        posts.sort_by(|a, b| (b.created_at, &b.id).cmp(&(a.created_at, &a.id)));

        if let Some(before) = &query.before {
            let Some(position) = posts.iter().position(|p| &p.id == before) else {
                return Ok(Vec::new());
            };
            posts.drain(..=position);
        }

        Ok(posts
            .into_iter()
            .take(clamp_limit(query.limit))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReactionRepository for InMemoryStore {
    async fn find_by_posts(&self, post_ids: &[PostId]) -> RepoResult<Vec<PostReaction>> {
        self.lookup(Lookup::Reactions)?;
        Ok(self
            .reactions
            .iter()
            .filter(|r| post_ids.contains(&r.post_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CommunityRepository for InMemoryStore {
    async fn find_all(&self, limit: i64) -> RepoResult<Vec<Community>> {
        self.lookup(Lookup::Communities)?;
        let mut communities = self.communities.clone();
        communities.sort_by(|a, b| a.name.cmp(&b.name));
        communities.truncate(clamp_limit(limit));
        Ok(communities)
    }
}

#[async_trait]
impl MembershipRepository for InMemoryStore {
    async fn count_by_communities(
        &self,
        community_ids: &[CommunityId],
    ) -> RepoResult<Vec<(CommunityId, i64)>> {
        self.lookup(Lookup::MemberCounts)?;
        Ok(tally(
            self.memberships
                .iter()
                .filter(|m| community_ids.contains(&m.community_id))
                .map(|m| m.community_id.clone()),
        ))
    }

    async fn find_joined(
        &self,
        community_ids: &[CommunityId],
        user_id: &UserId,
    ) -> RepoResult<Vec<CommunityId>> {
        self.lookup(Lookup::MemberJoined)?;
        Ok(self
            .memberships
            .iter()
            .filter(|m| &m.user_id == user_id && community_ids.contains(&m.community_id))
            .map(|m| m.community_id.clone())
            .collect())
    }
}
