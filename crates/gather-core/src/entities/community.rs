//! Community entity and membership rows

use chrono::{DateTime, Utc};

use crate::value_objects::{CommunityId, UserId};

/// Community (interest group)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Community {
    pub id: CommunityId,
    pub owner_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Community {
    pub fn new(id: CommunityId, owner_id: UserId, name: String) -> Self {
        Self {
            id,
            owner_id,
            name,
            description: None,
            category: None,
            created_at: Utc::now(),
        }
    }
}

/// Role a member holds inside a community
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MembershipRole {
    #[default]
    Member,
    Moderator,
    Owner,
}

impl MembershipRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Moderator => "moderator",
            Self::Owner => "owner",
        }
    }

    /// Parse the database representation, unknown values map to `Member`
    pub fn parse(value: &str) -> Self {
        match value {
            "owner" => Self::Owner,
            "moderator" => Self::Moderator,
            _ => Self::Member,
        }
    }
}

/// Membership row linking a user to a community
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityMembership {
    pub community_id: CommunityId,
    pub user_id: UserId,
    pub role: MembershipRole,
    pub joined_at: DateTime<Utc>,
}
