//! Relational enrichment pipeline
//!
//! Merges primary records with counts and actor-relative flags taken from the
//! relation tables. Every relation type is fetched with one batched lookup
//! keyed by the full id set, and independent lookups run concurrently. A
//! failing lookup fails the whole batch; partial results are never returned.
//!
//! Lookups per call:
//! - events: 1 without an actor, 4 with one (counts, joined, saved, profile)
//! - posts: 1
//! - communities: 1 without an actor, 2 with one

use std::collections::{HashMap, HashSet};

use gather_core::entities::{Community, Event, Post, PostReaction, UserProfile};
use gather_core::matching::{attach_matches, CompatibilityScorer};
use gather_core::value_objects::{CommunityId, EventId, PostId, UserId};
use gather_core::{DomainError, EnrichedCommunity, EnrichedEvent, EnrichedPost, RepoResult};
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Enrichment service
pub struct EnrichmentService<'a> {
    ctx: &'a ServiceContext,
    scorer: CompatibilityScorer,
}

impl<'a> EnrichmentService<'a> {
    /// Create an EnrichmentService that scores against today's date
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self::with_scorer(ctx, CompatibilityScorer::for_today())
    }

    pub fn with_scorer(ctx: &'a ServiceContext, scorer: CompatibilityScorer) -> Self {
        Self { ctx, scorer }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Attach attendance, actor flags and compatibility to a batch of events
    ///
    /// Without an actor the flags are `false` and nothing is scored. With an
    /// actor, the actor's profile is looked up once for the whole batch.
    #[instrument(skip(self, events), fields(batch = events.len(), has_actor = actor.is_some()))]
    pub async fn enrich_events(
        &self,
        events: Vec<Event>,
        actor: Option<&UserId>,
    ) -> ServiceResult<Vec<EnrichedEvent>> {
        if events.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<EventId> = events.iter().map(|e| e.id.clone()).collect();
        let (relations, profile) =
            tokio::try_join!(self.load_event_relations(&ids, actor), self.resolve_profile(actor))
                .map_err(|e| load_failed("events", e))?;

        Ok(self.merge_events(events, &relations, profile.as_ref()))
    }

    /// Same as [`enrich_events`](Self::enrich_events) with an already resolved profile
    #[instrument(skip(self, events, profile), fields(batch = events.len(), has_actor = actor.is_some()))]
    pub async fn enrich_events_with_profile(
        &self,
        events: Vec<Event>,
        actor: Option<&UserId>,
        profile: Option<&UserProfile>,
    ) -> ServiceResult<Vec<EnrichedEvent>> {
        if events.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<EventId> = events.iter().map(|e| e.id.clone()).collect();
        let relations = self
            .load_event_relations(&ids, actor)
            .await
            .map_err(|e| load_failed("events", e))?;

        Ok(self.merge_events(events, &relations, profile))
    }

    async fn load_event_relations(
        &self,
        ids: &[EventId],
        actor: Option<&UserId>,
    ) -> RepoResult<EventRelations> {
        let counts = self.ctx.rsvp_repo().count_by_events(ids);

        let (counts, joined, saved) = match actor {
            None => (counts.await?, Vec::new(), Vec::new()),
            Some(user_id) => tokio::try_join!(
                counts,
                self.ctx.rsvp_repo().find_joined(ids, user_id),
                self.ctx.saved_event_repo().find_saved(ids, user_id),
            )?,
        };

        Ok(EventRelations::new(counts, joined, saved))
    }

    async fn resolve_profile(&self, actor: Option<&UserId>) -> RepoResult<Option<UserProfile>> {
        match actor {
            Some(user_id) => self.ctx.profile_repo().find_by_id(user_id).await,
            None => Ok(None),
        }
    }

    fn merge_events(
        &self,
        events: Vec<Event>,
        relations: &EventRelations,
        profile: Option<&UserProfile>,
    ) -> Vec<EnrichedEvent> {
        let enriched = events
            .into_iter()
            .map(|event| relations.apply(event))
            .collect();

        debug!(profile = profile.is_some(), "merged event relations");
        attach_matches(&self.scorer, enriched, profile)
    }

    // =========================================================================
    // Posts
    // =========================================================================

    /// Attach reaction counts and the actor's own reactions to a batch of posts
    #[instrument(skip(self, posts), fields(batch = posts.len(), has_actor = actor.is_some()))]
    pub async fn enrich_posts(
        &self,
        posts: Vec<Post>,
        actor: Option<&UserId>,
    ) -> ServiceResult<Vec<EnrichedPost>> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<PostId> = posts.iter().map(|p| p.id.clone()).collect();
        let rows = self
            .ctx
            .reaction_repo()
            .find_by_posts(&ids)
            .await
            .map_err(|e| load_failed("feed", e))?;

        let mut grouped = group_reactions(rows, actor);
        Ok(posts
            .into_iter()
            .map(|post| {
                let summary = grouped.remove(&post.id).unwrap_or_default();
                EnrichedPost {
                    post,
                    reactions: summary.counts,
                    my_reactions: summary.mine,
                }
            })
            .collect())
    }

    // =========================================================================
    // Communities
    // =========================================================================

    /// Attach member counts and the actor's membership to a batch of communities
    #[instrument(skip(self, communities), fields(batch = communities.len(), has_actor = actor.is_some()))]
    pub async fn enrich_communities(
        &self,
        communities: Vec<Community>,
        actor: Option<&UserId>,
    ) -> ServiceResult<Vec<EnrichedCommunity>> {
        if communities.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<CommunityId> = communities.iter().map(|c| c.id.clone()).collect();
        let counts = self.ctx.membership_repo().count_by_communities(&ids);

        let (counts, joined) = match actor {
            None => (counts.await, Ok(Vec::new())),
            Some(user_id) => {
                tokio::join!(counts, self.ctx.membership_repo().find_joined(&ids, user_id))
            }
        };
        let counts = counts.map_err(|e| load_failed("communities", e))?;
        let joined = joined.map_err(|e| load_failed("communities", e))?;

        let counts = to_count_map(counts);
        let joined: HashSet<CommunityId> = joined.into_iter().collect();

        Ok(communities
            .into_iter()
            .map(|community| EnrichedCommunity {
                member_count: counts.get(&community.id).copied().unwrap_or(0),
                is_member: joined.contains(&community.id),
                community,
            })
            .collect())
    }
}

fn load_failed(resource: &'static str, err: DomainError) -> ServiceError {
    warn!(error = %err, resource, "relation lookup failed");
    ServiceError::load_failed(resource, err)
}

/// Fold `(id, count)` rows into a map, saturating counts into `u32`
fn to_count_map<K: std::hash::Hash + Eq>(rows: Vec<(K, i64)>) -> HashMap<K, u32> {
    rows.into_iter()
        .map(|(id, count)| (id, u32::try_from(count.max(0)).unwrap_or(u32::MAX)))
        .collect()
}

/// Batched relation data for one set of events
#[derive(Debug, Default)]
struct EventRelations {
    attendees: HashMap<EventId, u32>,
    joined: HashSet<EventId>,
    saved: HashSet<EventId>,
}

impl EventRelations {
    fn new(counts: Vec<(EventId, i64)>, joined: Vec<EventId>, saved: Vec<EventId>) -> Self {
        Self {
            attendees: to_count_map(counts),
            joined: joined.into_iter().collect(),
            saved: saved.into_iter().collect(),
        }
    }

    fn apply(&self, event: Event) -> EnrichedEvent {
        EnrichedEvent {
            attendee_count: self.attendees.get(&event.id).copied().unwrap_or(0),
            is_joined: self.joined.contains(&event.id),
            is_saved: self.saved.contains(&event.id),
            ..EnrichedEvent::bare(event)
        }
    }
}

/// Reactions on one post
#[derive(Debug, Default, PartialEq, Eq)]
struct ReactionSummary {
    counts: HashMap<String, u32>,
    mine: Vec<String>,
}

/// Group reaction rows per post; `mine` stays empty without an actor
fn group_reactions(
    rows: Vec<PostReaction>,
    actor: Option<&UserId>,
) -> HashMap<PostId, ReactionSummary> {
    let mut grouped: HashMap<PostId, ReactionSummary> = HashMap::new();

    for row in rows {
        let is_mine = actor.is_some_and(|user_id| row.is_by(user_id));
        let summary = grouped.entry(row.post_id).or_default();

        *summary.counts.entry(row.emoji.clone()).or_insert(0) += 1;
        if is_mine && !summary.mine.contains(&row.emoji) {
            summary.mine.push(row.emoji);
        }
    }

    grouped
}
