//! User profile - the matching-relevant slice of a user account

use crate::value_objects::UserId;

/// Read-only view of a user used for compatibility scoring
///
/// Accounts, credentials and profile editing live outside this crate;
/// only the fields the scorer reads are carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub location: Option<String>,
    pub interests: Vec<String>,
    pub is_pro: bool,
}

impl UserProfile {
    /// Create a profile with no location, no interests and a free plan
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            location: None,
            interests: Vec::new(),
            is_pro: false,
        }
    }

    /// Interests with blank entries removed
    pub fn interests(&self) -> impl Iterator<Item = &str> {
        self.interests
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
    }

    /// Check if at least one non-blank interest is recorded
    #[inline]
    pub fn has_interests(&self) -> bool {
        self.interests().next().is_some()
    }
}
