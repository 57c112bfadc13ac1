//! PostgreSQL implementation of MembershipRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gather_core::traits::{MembershipRepository, RepoResult};
use gather_core::value_objects::{CommunityId, UserId};

use crate::mappers::id_array;
use crate::models::MemberCountModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MembershipRepository
#[derive(Clone)]
pub struct PgMembershipRepository {
    pool: PgPool,
}

impl PgMembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for PgMembershipRepository {
    #[instrument(skip(self, community_ids), fields(batch = community_ids.len()))]
    async fn count_by_communities(
        &self,
        community_ids: &[CommunityId],
    ) -> RepoResult<Vec<(CommunityId, i64)>> {
        let results = sqlx::query_as::<_, MemberCountModel>(
            r#"
            SELECT community_id, COUNT(*) AS count
            FROM community_members
            WHERE community_id = ANY($1)
            GROUP BY community_id
            "#,
        )
        .bind(id_array(community_ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|r| (CommunityId::new(r.community_id), r.count))
            .collect())
    }

    #[instrument(skip(self, community_ids), fields(batch = community_ids.len()))]
    async fn find_joined(
        &self,
        community_ids: &[CommunityId],
        user_id: &UserId,
    ) -> RepoResult<Vec<CommunityId>> {
        let results = sqlx::query_scalar::<_, String>(
            r#"
            SELECT community_id
            FROM community_members
            WHERE community_id = ANY($1) AND user_id = $2
            "#,
        )
        .bind(id_array(community_ids))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommunityId::new).collect())
    }
}
