//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gather_core::entities::Post;
use gather_core::traits::{PostQuery, PostRepository, RepoResult};
use gather_core::value_objects::{CommunityId, PostId};

use crate::models::PostModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_recent(&self, query: &PostQuery) -> RepoResult<Vec<Post>> {
        let limit = query.limit.clamp(1, 100);

        // Keyset pagination on (created_at, id); an unknown cursor yields no rows.
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, community_id, content, image_url, created_at
            FROM posts
            WHERE ($1::TEXT IS NULL
                   OR (created_at, id) < (SELECT created_at, id FROM posts WHERE id = $1))
              AND ($2::TEXT IS NULL OR community_id = $2)
            ORDER BY created_at DESC, id DESC
            LIMIT $3
            "#,
        )
        .bind(query.before.as_ref().map(PostId::as_str))
        .bind(query.community_id.as_ref().map(CommunityId::as_str))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }
}
