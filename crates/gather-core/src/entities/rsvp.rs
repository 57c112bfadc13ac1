//! Event relation rows - RSVPs and saved events

use chrono::{DateTime, Utc};

use crate::value_objects::{EventId, UserId};

/// A user's RSVP to an event (counts toward attendance)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rsvp {
    pub event_id: EventId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Rsvp {
    pub fn new(event_id: EventId, user_id: UserId) -> Self {
        Self {
            event_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}

/// An event bookmarked by a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedEvent {
    pub event_id: EventId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl SavedEvent {
    pub fn new(event_id: EventId, user_id: UserId) -> Self {
        Self {
            event_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
