//! Response DTOs for API endpoints
//!
//! Field names are camelCase on the wire. Match fields are flattened from an
//! `Option`, so events without a compatibility score carry no `matchScore` or
//! `matchTags` keys at all.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Event Responses
// ============================================================================

/// Compatibility fields, present only on scored micro-meets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub match_score: u8,
    pub match_tags: Vec<String>,
}

/// Enriched event
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: String,
    pub host_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub date: Option<String>,
    pub price: Option<f64>,
    pub max_spots: i32,
    pub is_micro_meet: bool,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
    pub attendee_count: u32,
    pub is_joined: bool,
    pub is_saved: bool,
    #[serde(flatten)]
    pub compatibility: Option<MatchInfo>,
}

// ============================================================================
// Feed Responses
// ============================================================================

/// Enriched feed post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub community_id: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Emoji -> count, sorted by emoji for stable output
    pub reactions: BTreeMap<String, u32>,
    pub my_reactions: Vec<String>,
}

/// A page of the feed
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub data: Vec<PostResponse>,
    /// Cursor for the next (older) page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_before: Option<String>,
    pub has_more: bool,
}

// ============================================================================
// Community Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityResponse {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub member_count: u32,
    pub is_member: bool,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
