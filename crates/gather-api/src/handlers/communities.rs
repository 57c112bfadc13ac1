//! Community handlers

use axum::{extract::State, Json};
use gather_service::{ApiResponse, CommunityListQuery, CommunityResponse, DiscoveryService, DEFAULT_PAGE_SIZE};

use crate::extractors::{OptionalAuthUser, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// List communities with member counts
///
/// GET /api/v1/communities
pub async fn list_communities(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedQuery(query): ValidatedQuery<CommunityListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<CommunityResponse>>>> {
    let service = DiscoveryService::new(state.service_context());
    let communities = service
        .list_communities(query.limit.unwrap_or(DEFAULT_PAGE_SIZE), auth.user_id())
        .await?;

    Ok(Json(ApiResponse::new(communities)))
}
