//! Query DTOs for API endpoints
//!
//! All query DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

use gather_core::traits::{EventQuery, PostQuery};
use gather_core::value_objects::{CommunityId, PostId};

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: i64 = 50;

// ============================================================================
// Event Queries
// ============================================================================

/// `GET /events` query string
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EventListQuery {
    #[validate(length(min = 1, max = 64, message = "Category must be 1-64 characters"))]
    pub category: Option<String>,

    #[serde(default)]
    pub micro_meets_only: bool,

    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

impl From<EventListQuery> for EventQuery {
    fn from(query: EventListQuery) -> Self {
        Self {
            category: query.category.filter(|c| !c.trim().is_empty()),
            micro_meets_only: query.micro_meets_only,
            limit: query.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

// ============================================================================
// Feed Queries
// ============================================================================

/// `GET /feed` query string
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FeedQuery {
    /// Return posts older than this post id
    #[validate(length(min = 1, max = 64, message = "Cursor must be 1-64 characters"))]
    pub before: Option<String>,

    #[validate(length(min = 1, max = 64, message = "Community id must be 1-64 characters"))]
    pub community_id: Option<String>,

    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

impl From<FeedQuery> for PostQuery {
    fn from(query: FeedQuery) -> Self {
        Self {
            before: query.before.map(PostId::new),
            community_id: query.community_id.map(CommunityId::new),
            limit: query.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

// ============================================================================
// Community Queries
// ============================================================================

/// `GET /communities` query string
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CommunityListQuery {
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}
