//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gather_core::entities::{Event, EventStatus};
use gather_core::traits::{EventQuery, EventRepository, RepoResult};
use crate::models::EventModel;

use super::error::map_db_error;

const EVENT_COLUMNS: &str = "id, host_id, title, description, category, location, latitude, \
     longitude, date, price, max_spots, is_micro_meet, status, created_at";

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_active(&self, query: &EventQuery) -> RepoResult<Vec<Event>> {
        let limit = query.limit.clamp(1, 100);
        let sql = format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE status = $1
              AND ($2::TEXT IS NULL OR lower(category) = lower($2))
              AND (NOT $3 OR is_micro_meet)
            ORDER BY date ASC NULLS LAST, created_at DESC
            LIMIT $4
            "#
        );

        let results = sqlx::query_as::<_, EventModel>(&sql)
            .bind(EventStatus::Active.as_str())
            .bind(query.category.as_deref())
            .bind(query.micro_meets_only)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_active_micro_meets(&self) -> RepoResult<Vec<Event>> {
        let sql = format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE status = $1 AND is_micro_meet
            ORDER BY date ASC NULLS LAST, created_at DESC
            "#
        );

        let results = sqlx::query_as::<_, EventModel>(&sql)
            .bind(EventStatus::Active.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }
}
