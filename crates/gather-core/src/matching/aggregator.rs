//! Applying the scorer across a batch of events

use super::result::MatchResult;
use super::scorer::CompatibilityScorer;
use crate::entities::{Event, UserProfile};

/// Micro-meets scoring below this are not offered as matches
pub const MIN_MATCH_SCORE: u8 = 30;

/// A micro-meet paired with its score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEvent {
    pub event: Event,
    pub result: MatchResult,
}

/// Anything wrapping an [`Event`] that can carry a match result
pub trait Matchable {
    /// The wrapped event
    fn event(&self) -> &Event;

    /// Attach the compatibility result for the wrapped event
    fn attach_match(&mut self, result: MatchResult);
}

/// Micro-meets worth suggesting to `user`, best first
///
/// Regular events are dropped, as are micro-meets scoring under
/// [`MIN_MATCH_SCORE`]. The sort is stable, so equal scores keep their input
/// order.
pub fn matched_micro_meets(
    scorer: &CompatibilityScorer,
    user: &UserProfile,
    events: Vec<Event>,
) -> Vec<ScoredEvent> {
    let mut matches: Vec<ScoredEvent> = events
        .into_iter()
        .filter(|event| event.is_micro_meet)
        .map(|event| {
            let result = scorer.score(user, &event);
            ScoredEvent { event, result }
        })
        .filter(|scored| scored.result.score >= MIN_MATCH_SCORE)
        .collect();

    matches.sort_by(|a, b| b.result.score.cmp(&a.result.score));
    matches
}

/// Attach match results to the micro-meets in a mixed event list
///
/// With no user the list is returned untouched. Otherwise every micro-meet
/// gets its result and regular events are passed through without one. No
/// filtering or reordering happens here.
pub fn attach_matches<T: Matchable>(
    scorer: &CompatibilityScorer,
    events: Vec<T>,
    user: Option<&UserProfile>,
) -> Vec<T> {
    let Some(user) = user else {
        return events;
    };

    events
        .into_iter()
        .map(|mut item| {
            if item.event().is_micro_meet {
                let result = scorer.score(user, item.event());
                item.attach_match(result);
            }
            item
        })
        .collect()
}
