//! Composite read models
//!
//! Primary records merged with counts and actor-relative flags derived from
//! relation tables at request time. They are built fresh per read and never
//! written back.

use std::collections::HashMap;

use crate::entities::{Community, Event, Post};
use crate::matching::{EventMatch, MatchResult, Matchable};

/// Event with attendance, actor flags and (for micro-meets) compatibility
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedEvent {
    pub event: Event,
    pub attendee_count: u32,
    /// Acting user has RSVP'd; `false` when there is no acting user
    pub is_joined: bool,
    /// Acting user has saved the event; `false` when there is no acting user
    pub is_saved: bool,
    pub compatibility: EventMatch,
}

impl EnrichedEvent {
    /// Wrap an event with zero counts, no actor flags and no match
    pub fn bare(event: Event) -> Self {
        Self {
            event,
            attendee_count: 0,
            is_joined: false,
            is_saved: false,
            compatibility: EventMatch::NotApplicable,
        }
    }
}

impl Matchable for EnrichedEvent {
    fn event(&self) -> &Event {
        &self.event
    }

    fn attach_match(&mut self, result: MatchResult) {
        self.compatibility = EventMatch::Scored(result);
    }
}

/// Feed post with reaction counts and the acting user's own reactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedPost {
    pub post: Post,
    /// Emoji to count; empty (never absent) for posts without reactions
    pub reactions: HashMap<String, u32>,
    /// Emojis the acting user applied; empty when there is no acting user
    pub my_reactions: Vec<String>,
}

impl EnrichedPost {
    pub fn bare(post: Post) -> Self {
        Self {
            post,
            reactions: HashMap::new(),
            my_reactions: Vec::new(),
        }
    }

    /// Total reactions across all emojis
    pub fn total_reactions(&self) -> u32 {
        self.reactions.values().sum()
    }
}

/// Community with member count and the acting user's membership
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedCommunity {
    pub community: Community,
    pub member_count: u32,
    pub is_member: bool,
}

impl EnrichedCommunity {
    pub fn bare(community: Community) -> Self {
        Self {
            community,
            member_count: 0,
            is_member: false,
        }
    }
}
