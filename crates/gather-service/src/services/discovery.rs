//! Discovery service
//!
//! Read use cases behind the HTTP surface: event listings, matched
//! micro-meets, the feed and communities. Each loads primary records and
//! hands them to [`EnrichmentService`].

use gather_core::matching::{matched_micro_meets, CompatibilityScorer};
use gather_core::traits::{EventQuery, PostQuery};
use gather_core::value_objects::UserId;
use gather_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CommunityResponse, EventResponse, FeedResponse, PostResponse};

use super::context::ServiceContext;
use super::enrichment::EnrichmentService;
use super::error::{ServiceError, ServiceResult};

/// Discovery service
pub struct DiscoveryService<'a> {
    ctx: &'a ServiceContext,
    scorer: CompatibilityScorer,
}

impl<'a> DiscoveryService<'a> {
    /// Create a new DiscoveryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self::with_scorer(ctx, CompatibilityScorer::for_today())
    }

    pub fn with_scorer(ctx: &'a ServiceContext, scorer: CompatibilityScorer) -> Self {
        Self { ctx, scorer }
    }

    fn enrichment(&self) -> EnrichmentService<'a> {
        EnrichmentService::with_scorer(self.ctx, self.scorer)
    }

    /// List active events, enriched for the actor
    #[instrument(skip(self))]
    pub async fn list_events(
        &self,
        query: EventQuery,
        actor: Option<&UserId>,
    ) -> ServiceResult<Vec<EventResponse>> {
        let events = self
            .ctx
            .event_repo()
            .find_active(&query)
            .await
            .map_err(|e| ServiceError::load_failed("events", e))?;

        let enriched = self.enrichment().enrich_events(events, actor).await?;
        Ok(enriched.into_iter().map(EventResponse::from).collect())
    }

    /// Micro-meets matching the actor's profile, best match first
    ///
    /// Every active micro-meet is scored, not just the first page.
    ///
    /// # Errors
    /// `ProfileNotFound` when the actor has no profile to match against
    #[instrument(skip(self))]
    pub async fn matched_micro_meets(&self, actor: &UserId) -> ServiceResult<Vec<EventResponse>> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(actor)
            .await
            .map_err(|e| ServiceError::load_failed("profile", e))?
            .ok_or_else(|| DomainError::ProfileNotFound(actor.clone()))?;

        let candidates = self
            .ctx
            .event_repo()
            .find_active_micro_meets()
            .await
            .map_err(|e| ServiceError::load_failed("events", e))?;

        let considered = candidates.len();
        let ranked: Vec<_> = matched_micro_meets(&self.scorer, &profile, candidates)
            .into_iter()
            .map(|scored| scored.event)
            .collect();
        info!(considered, matched = ranked.len(), "ranked micro-meets");

        let enriched = self
            .enrichment()
            .enrich_events_with_profile(ranked, Some(actor), Some(&profile))
            .await?;
        Ok(enriched.into_iter().map(EventResponse::from).collect())
    }

    /// Recent posts, newest first
    #[instrument(skip(self))]
    pub async fn feed(&self, query: PostQuery, actor: Option<&UserId>) -> ServiceResult<FeedResponse> {
        let posts = self
            .ctx
            .post_repo()
            .find_recent(&query)
            .await
            .map_err(|e| ServiceError::load_failed("feed", e))?;

        let has_more = i64::try_from(posts.len()).is_ok_and(|n| n >= query.limit);
        let next_before = if has_more {
            posts.last().map(|p| p.id.to_string())
        } else {
            None
        };

        let enriched = self.enrichment().enrich_posts(posts, actor).await?;
        Ok(FeedResponse {
            data: enriched.into_iter().map(PostResponse::from).collect(),
            next_before,
            has_more,
        })
    }

    /// Communities, enriched for the actor
    #[instrument(skip(self))]
    pub async fn list_communities(
        &self,
        limit: i64,
        actor: Option<&UserId>,
    ) -> ServiceResult<Vec<CommunityResponse>> {
        let communities = self
            .ctx
            .community_repo()
            .find_all(limit)
            .await
            .map_err(|e| ServiceError::load_failed("communities", e))?;

        let enriched = self
            .enrichment()
            .enrich_communities(communities, actor)
            .await?;
        Ok(enriched.into_iter().map(CommunityResponse::from).collect())
    }
}
