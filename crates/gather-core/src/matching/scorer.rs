//! Compatibility scorer
//!
//! Five independent components, each capped, are summed and clamped to
//! `0..=100`:
//!
//! | component     | max | tag                                  |
//! |---------------|-----|--------------------------------------|
//! | interests     | 40  | shared interests                     |
//! | location      | 30  | "Near you" / "In your area"          |
//! | group size    | 15  | "Great for meaningful connections"   |
//! | price         | 12  | "Free event" / "Great value"         |
//! | timing        | 5   | "Coming up soon"                     |
//!
//! Tags keep component order and are cut to two; a micro-meet with no tag
//! gets the fallback tag.

use chrono::{NaiveDate, Utc};

use super::location::location_similarity;
use super::result::MatchResult;
use super::tables::{
    category_keywords, interest_tag, AREA_THRESHOLD, FREE_POINTS, INTEREST_CAP,
    INTEREST_EXPLORE_POINTS, INTEREST_POINTS_PER_MATCH, INTIMACY_KEYWORDS, LOCATION_CAP,
    MAX_TAGGED_INTERESTS, MAX_TAGS, NEAR_THRESHOLD, PRO_PRICE_POINTS, SMALL_GROUP_AFFINITY_POINTS,
    SMALL_GROUP_BASE_POINTS, SMALL_GROUP_MAX_SPOTS, SOON_POINTS, SOON_WINDOW_DAYS, TAG_AREA,
    TAG_CONNECTIONS, TAG_FALLBACK, TAG_FREE, TAG_NEAR, TAG_SOON, TAG_VALUE, VALUE_POINTS,
    VALUE_PRICE_LIMIT,
};
use crate::entities::{Event, UserProfile};

/// Score a user against an event using today's UTC date
pub fn score(user: &UserProfile, event: &Event) -> MatchResult {
    CompatibilityScorer::for_today().score(user, event)
}

/// Points and optional tag produced by one component
#[derive(Debug, Default)]
struct Component {
    points: f64,
    tag: Option<String>,
}

impl Component {
    fn none() -> Self {
        Self::default()
    }

    fn points(points: f64) -> Self {
        Self { points, tag: None }
    }

    fn tagged(points: f64, tag: impl Into<String>) -> Self {
        Self {
            points,
            tag: Some(tag.into()),
        }
    }
}

/// Scores user/event pairs relative to a fixed "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityScorer {
    today: NaiveDate,
}

impl CompatibilityScorer {
    /// Create a scorer that treats `today` as the current date
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Create a scorer for the current UTC date
    pub fn for_today() -> Self {
        Self::new(Utc::now().date_naive())
    }

    /// The date the timing component counts from
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Compute the compatibility of `user` with `event`
    ///
    /// Regular events score 0 with no tags. Micro-meets always get between
    /// one and two tags.
    pub fn score(&self, user: &UserProfile, event: &Event) -> MatchResult {
        if !event.is_micro_meet {
            return MatchResult::zero();
        }

        let components = [
            interest_overlap(user, event),
            location_proximity(user, event),
            group_size(user, event),
            price_fit(user, event),
            self.timing(event),
        ];

        let mut total = 0.0;
        let mut tags = Vec::with_capacity(MAX_TAGS);
        for component in components {
            total += component.points;
            if let Some(tag) = component.tag {
                tags.push(tag);
            }
        }

        tags.truncate(MAX_TAGS);
        if tags.is_empty() {
            tags.push(TAG_FALLBACK.to_string());
        }

        MatchResult {
            score: total.clamp(0.0, 100.0).round() as u8,
            tags,
        }
    }

    fn timing(&self, event: &Event) -> Component {
        let Some(date) = event.calendar_date() else {
            return Component::none();
        };

        let days_until = (date - self.today).num_days();
        if (0..=SOON_WINDOW_DAYS).contains(&days_until) {
            Component::tagged(SOON_POINTS, TAG_SOON)
        } else {
            Component::none()
        }
    }
}

/// Either string contains the other, ignoring case
fn overlaps(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(b.as_str()) || b.contains(a.as_str())
}

fn interest_overlap(user: &UserProfile, event: &Event) -> Component {
    let keywords = category_keywords(&event.category);
    let matched: Vec<&str> = user
        .interests()
        .filter(|interest| keywords.iter().any(|keyword| overlaps(interest, keyword)))
        .collect();

    if matched.is_empty() {
        return if user.has_interests() {
            Component::points(INTEREST_EXPLORE_POINTS)
        } else {
            Component::none()
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let points = (INTEREST_POINTS_PER_MATCH * matched.len() as f64).min(INTEREST_CAP);
    let named = &matched[..matched.len().min(MAX_TAGGED_INTERESTS)];
    Component::tagged(points, interest_tag(named))
}

fn location_proximity(user: &UserProfile, event: &Event) -> Component {
    let (Some(user_location), Some(event_location)) =
        (user.location.as_deref(), event.location.as_deref())
    else {
        return Component::none();
    };
    if !event.has_coordinates() {
        return Component::none();
    }

    let similarity = location_similarity(Some(user_location), Some(event_location));
    let points = (similarity * LOCATION_CAP).min(LOCATION_CAP);

    if similarity > NEAR_THRESHOLD {
        Component::tagged(points, TAG_NEAR)
    } else if similarity > AREA_THRESHOLD {
        Component::tagged(points, TAG_AREA)
    } else {
        Component::points(points)
    }
}

fn group_size(user: &UserProfile, event: &Event) -> Component {
    if event.spots() > SMALL_GROUP_MAX_SPOTS {
        return Component::none();
    }

    let wants_intimacy = user.interests().any(|interest| {
        let interest = interest.to_lowercase();
        INTIMACY_KEYWORDS
            .iter()
            .any(|keyword| interest.contains(keyword.to_lowercase().as_str()))
    });

    if wants_intimacy {
        Component::tagged(SMALL_GROUP_AFFINITY_POINTS, TAG_CONNECTIONS)
    } else {
        Component::points(SMALL_GROUP_BASE_POINTS)
    }
}

fn price_fit(user: &UserProfile, event: &Event) -> Component {
    let Some(price) = event.valid_price() else {
        return Component::none();
    };

    if price <= 0.0 {
        Component::tagged(FREE_POINTS, TAG_FREE)
    } else if price <= VALUE_PRICE_LIMIT {
        Component::tagged(VALUE_POINTS, TAG_VALUE)
    } else if user.is_pro {
        Component::points(PRO_PRICE_POINTS)
    } else {
        Component::none()
    }
}
