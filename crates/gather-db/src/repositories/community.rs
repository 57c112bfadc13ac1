//! PostgreSQL implementation of CommunityRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gather_core::entities::Community;
use gather_core::traits::{CommunityRepository, RepoResult};

use crate::models::CommunityModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommunityRepository
#[derive(Clone)]
pub struct PgCommunityRepository {
    pool: PgPool,
}

impl PgCommunityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommunityRepository for PgCommunityRepository {
    #[instrument(skip(self))]
    async fn find_all(&self, limit: i64) -> RepoResult<Vec<Community>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, CommunityModel>(
            r#"
            SELECT id, owner_id, name, description, category, created_at
            FROM communities
            ORDER BY name, id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Community::from).collect())
    }
}
