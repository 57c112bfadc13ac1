//! PostgreSQL implementations of RsvpRepository and SavedEventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gather_core::traits::{RepoResult, RsvpRepository, SavedEventRepository};
use gather_core::value_objects::{EventId, UserId};

use crate::mappers::id_array;
use crate::models::AttendeeCountModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RsvpRepository
#[derive(Clone)]
pub struct PgRsvpRepository {
    pool: PgPool,
}

impl PgRsvpRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for PgRsvpRepository {
    #[instrument(skip(self, event_ids), fields(batch = event_ids.len()))]
    async fn count_by_events(&self, event_ids: &[EventId]) -> RepoResult<Vec<(EventId, i64)>> {
        let results = sqlx::query_as::<_, AttendeeCountModel>(
            r#"
            SELECT event_id, COUNT(*) AS count
            FROM event_rsvps
            WHERE event_id = ANY($1)
            GROUP BY event_id
            "#,
        )
        .bind(id_array(event_ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|r| (EventId::new(r.event_id), r.count))
            .collect())
    }

    #[instrument(skip(self, event_ids), fields(batch = event_ids.len()))]
    async fn find_joined(&self, event_ids: &[EventId], user_id: &UserId) -> RepoResult<Vec<EventId>> {
        let results = sqlx::query_scalar::<_, String>(
            r#"
            SELECT event_id
            FROM event_rsvps
            WHERE event_id = ANY($1) AND user_id = $2
            "#,
        )
        .bind(id_array(event_ids))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(EventId::new).collect())
    }
}

/// PostgreSQL implementation of SavedEventRepository
#[derive(Clone)]
pub struct PgSavedEventRepository {
    pool: PgPool,
}

impl PgSavedEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SavedEventRepository for PgSavedEventRepository {
    #[instrument(skip(self, event_ids), fields(batch = event_ids.len()))]
    async fn find_saved(&self, event_ids: &[EventId], user_id: &UserId) -> RepoResult<Vec<EventId>> {
        let results = sqlx::query_scalar::<_, String>(
            r#"
            SELECT event_id
            FROM saved_events
            WHERE event_id = ANY($1) AND user_id = $2
            "#,
        )
        .bind(id_array(event_ids))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(EventId::new).collect())
    }
}
