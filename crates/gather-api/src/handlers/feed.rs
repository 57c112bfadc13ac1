//! Feed handlers

use axum::{extract::State, Json};
use gather_service::{DiscoveryService, FeedQuery, FeedResponse};

use crate::extractors::{OptionalAuthUser, ValidatedQuery};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Recent posts, newest first
///
/// GET /api/v1/feed
pub async fn get_feed(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedQuery(query): ValidatedQuery<FeedQuery>,
) -> ApiResult<Json<FeedResponse>> {
    if query.before.as_deref().is_some_and(|b| b.trim().is_empty()) {
        return Err(ApiError::invalid_query("before must not be blank"));
    }

    let service = DiscoveryService::new(state.service_context());
    let page = service.feed(query.into(), auth.user_id()).await?;

    Ok(Json(page))
}
