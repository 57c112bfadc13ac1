//! Community database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for communities table
#[derive(Debug, Clone, FromRow)]
pub struct CommunityModel {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Member count per community (from a grouped query)
#[derive(Debug, Clone, FromRow)]
pub struct MemberCountModel {
    pub community_id: String,
    pub count: i64,
}
