//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gather_core::entities::PostReaction;
use gather_core::traits::{ReactionRepository, RepoResult};
use gather_core::value_objects::PostId;

use crate::mappers::id_array;
use crate::models::PostReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self, post_ids), fields(batch = post_ids.len()))]
    async fn find_by_posts(&self, post_ids: &[PostId]) -> RepoResult<Vec<PostReaction>> {
        let results = sqlx::query_as::<_, PostReactionModel>(
            r#"
            SELECT post_id, user_id, emoji, created_at
            FROM post_reactions
            WHERE post_id = ANY($1)
            ORDER BY created_at
            "#,
        )
        .bind(id_array(post_ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PostReaction::from).collect())
    }
}
