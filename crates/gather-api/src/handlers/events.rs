//! Event handlers
//!
//! Event listing and micro-meet matching.

use axum::{extract::State, Json};
use gather_service::{ApiResponse, DiscoveryService, EventListQuery, EventResponse};

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// List active events
///
/// GET /api/v1/events
///
/// Micro-meets carry `matchScore`/`matchTags` only when the caller is
/// authenticated and has a profile.
pub async fn list_events(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedQuery(query): ValidatedQuery<EventListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<EventResponse>>>> {
    let service = DiscoveryService::new(state.service_context());
    let events = service.list_events(query.into(), auth.user_id()).await?;

    Ok(Json(ApiResponse::new(events)))
}

/// Micro-meets matching the caller, best match first
///
/// GET /api/v1/micro-meets/matches
pub async fn matched_micro_meets(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<EventResponse>>>> {
    let service = DiscoveryService::new(state.service_context());
    let events = service.matched_micro_meets(&auth.user_id).await?;

    Ok(Json(ApiResponse::new(events)))
}
