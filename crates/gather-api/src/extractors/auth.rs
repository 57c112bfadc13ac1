//! Authentication extractors
//!
//! Resolve the acting user from an `Authorization: Bearer` access token.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use gather_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user; rejects the request without a valid token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
}

impl AuthUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let user_id = app_state
            .jwt_service()
            .authenticate(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected access token");
                ApiError::App(e)
            })?;

        Ok(AuthUser::new(user_id))
    }
}

/// Optional acting user
///
/// A missing, malformed, expired or otherwise invalid token resolves to
/// `None`; it never rejects the request.
#[derive(Debug, Clone, Default)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn user_id(&self) -> Option<&UserId> {
        self.0.as_ref().map(|auth| &auth.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(TypedHeader(Authorization(bearer))) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
        else {
            return Ok(OptionalAuthUser(None));
        };

        let app_state = AppState::from_ref(state);
        match app_state.jwt_service().authenticate(bearer.token()) {
            Ok(user_id) => Ok(OptionalAuthUser(Some(AuthUser::new(user_id)))),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unusable access token");
                Ok(OptionalAuthUser(None))
            }
        }
    }
}
