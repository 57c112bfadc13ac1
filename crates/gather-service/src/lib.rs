//! # gather-service
//!
//! Application layer: the relational enrichment pipeline, discovery use cases,
//! and the DTOs they return.

pub mod dto;
pub mod services;

pub use services::{
    DiscoveryService, EnrichmentService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};

pub use dto::{
    ApiResponse, CommunityListQuery, CommunityResponse, EventListQuery, EventResponse, FeedQuery,
    FeedResponse, HealthChecks, HealthResponse, MatchInfo, PostResponse, ReadinessResponse,
};
pub use dto::requests::DEFAULT_PAGE_SIZE;
