//! Route definitions
//!
//! Read routes mounted under /api/v1, health probes at the root.

use axum::{routing::get, Router};

use crate::handlers::{communities, events, feed, health};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(event_routes())
        .route("/feed", get(feed::get_feed))
        .route("/communities", get(communities::list_communities))
}

/// Event routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events))
        .route("/micro-meets/matches", get(events::matched_micro_meets))
}
