//! Match outputs

use serde::Serialize;

/// Compatibility score (0-100) with up to two human-readable reasons
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub score: u8,
    pub tags: Vec<String>,
}

impl MatchResult {
    /// Result for events that are not eligible for scoring
    pub fn zero() -> Self {
        Self {
            score: 0,
            tags: Vec::new(),
        }
    }
}

/// Whether an event carries a compatibility score at all
///
/// `NotApplicable` (regular events, or no acting profile) is distinct from a
/// micro-meet that was scored and came out low.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventMatch {
    #[default]
    NotApplicable,
    Scored(MatchResult),
}

impl EventMatch {
    /// The score result, if one was attached
    pub fn result(&self) -> Option<&MatchResult> {
        match self {
            Self::NotApplicable => None,
            Self::Scored(result) => Some(result),
        }
    }

    #[inline]
    pub fn is_scored(&self) -> bool {
        matches!(self, Self::Scored(_))
    }
}
