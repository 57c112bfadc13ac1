//! Read model to DTO mappers
//!
//! Implements `From` conversions from enriched read models to response DTOs.

use gather_core::{EnrichedCommunity, EnrichedEvent, EnrichedPost, MatchResult};

use super::responses::{CommunityResponse, EventResponse, MatchInfo, PostResponse};

// ============================================================================
// Event Mappers
// ============================================================================

impl From<&MatchResult> for MatchInfo {
    fn from(result: &MatchResult) -> Self {
        Self {
            match_score: result.score,
            match_tags: result.tags.clone(),
        }
    }
}

impl From<EnrichedEvent> for EventResponse {
    fn from(enriched: EnrichedEvent) -> Self {
        let compatibility = enriched.compatibility.result().map(MatchInfo::from);
        let event = enriched.event;
        let max_spots = event.spots();

        Self {
            id: event.id.into_inner(),
            host_id: event.host_id.into_inner(),
            title: event.title,
            description: event.description,
            category: event.category,
            location: event.location,
            latitude: event.latitude,
            longitude: event.longitude,
            date: event.date,
            price: event.price,
            max_spots,
            is_micro_meet: event.is_micro_meet,
            status: event.status.as_str(),
            created_at: event.created_at,
            attendee_count: enriched.attendee_count,
            is_joined: enriched.is_joined,
            is_saved: enriched.is_saved,
            compatibility,
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl From<EnrichedPost> for PostResponse {
    fn from(enriched: EnrichedPost) -> Self {
        let post = enriched.post;

        Self {
            id: post.id.into_inner(),
            author_id: post.author_id.into_inner(),
            community_id: post.community_id.map(|c| c.into_inner()),
            content: post.content,
            image_url: post.image_url,
            created_at: post.created_at,
            reactions: enriched.reactions.into_iter().collect(),
            my_reactions: enriched.my_reactions,
        }
    }
}

// ============================================================================
// Community Mappers
// ============================================================================

impl From<EnrichedCommunity> for CommunityResponse {
    fn from(enriched: EnrichedCommunity) -> Self {
        let community = enriched.community;

        Self {
            id: community.id.into_inner(),
            owner_id: community.owner_id.into_inner(),
            name: community.name,
            description: community.description,
            category: community.category,
            created_at: community.created_at,
            member_count: enriched.member_count,
            is_member: enriched.is_member,
        }
    }
}
