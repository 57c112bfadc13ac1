//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Query DTOs with validation for API inputs
//! - Response DTOs for serializing enriched read models
//! - Mappers from read models to response DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CommunityListQuery, EventListQuery, FeedQuery};

pub use responses::{
    ApiResponse, CommunityResponse, EventResponse, FeedResponse, HealthChecks, HealthResponse,
    MatchInfo, PostResponse, ReadinessResponse,
};
