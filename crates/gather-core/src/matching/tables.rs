//! Fixed scoring tables, weights and tag strings

/// Category label to the interest keywords it covers
///
/// Categories not listed here match only against their own label.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("Food & Drinks", &["Food", "Cooking", "Wine", "Dining"]),
    ("Tech", &["Tech", "Technology", "AI", "Coding", "Startups"]),
    ("Sports & Fitness", &["Sports", "Fitness", "Running", "Yoga", "Cycling"]),
    ("Arts & Culture", &["Art", "Culture", "Museums", "Theatre", "Photography"]),
    ("Music", &["Music", "Concerts", "Singing", "Jazz"]),
    ("Outdoors", &["Hiking", "Nature", "Outdoors", "Camping"]),
    ("Games", &["Gaming", "Board Games", "Trivia", "Puzzles"]),
    ("Wellness", &["Wellness", "Meditation", "Mindfulness", "Health"]),
    ("Books & Learning", &["Books", "Reading", "Writing", "Languages"]),
    ("Social", &["Community", "Networking", "Connection", "Socializing"]),
];

/// Interests that signal a preference for small, close-knit groups
pub const INTIMACY_KEYWORDS: &[&str] = &["Intimate", "Community", "Connection", "Deep"];

pub const INTEREST_POINTS_PER_MATCH: f64 = 15.0;
pub const INTEREST_CAP: f64 = 40.0;
/// Awarded instead of overlap points when nothing matches but interests exist
pub const INTEREST_EXPLORE_POINTS: f64 = 5.0;

pub const LOCATION_CAP: f64 = 30.0;
pub const NEAR_THRESHOLD: f64 = 0.7;
pub const AREA_THRESHOLD: f64 = 0.3;

pub const SMALL_GROUP_MAX_SPOTS: i32 = 8;
pub const SMALL_GROUP_AFFINITY_POINTS: f64 = 15.0;
pub const SMALL_GROUP_BASE_POINTS: f64 = 8.0;

pub const FREE_POINTS: f64 = 10.0;
pub const VALUE_PRICE_LIMIT: f64 = 20.0;
pub const VALUE_POINTS: f64 = 8.0;
pub const PRO_PRICE_POINTS: f64 = 12.0;

pub const SOON_WINDOW_DAYS: i64 = 7;
pub const SOON_POINTS: f64 = 5.0;

pub const MAX_TAGS: usize = 2;
/// Interests named in the shared-interest tag
pub const MAX_TAGGED_INTERESTS: usize = 2;

pub const TAG_NEAR: &str = "Near you";
pub const TAG_AREA: &str = "In your area";
pub const TAG_CONNECTIONS: &str = "Great for meaningful connections";
pub const TAG_FREE: &str = "Free event";
pub const TAG_VALUE: &str = "Great value";
pub const TAG_SOON: &str = "Coming up soon";
pub const TAG_FALLBACK: &str = "Check it out";

/// Shared-interest tag naming the matched interests
pub fn interest_tag(interests: &[&str]) -> String {
    format!("You're into {}", interests.join(" & "))
}

/// Keywords for a category label
///
/// Lookup ignores surrounding whitespace and ASCII case. Unknown or blank
/// categories fall back to the label itself.
pub fn category_keywords(category: &str) -> Vec<&str> {
    let label = category.trim();
    if let Some((_, keywords)) = CATEGORY_KEYWORDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(label))
    {
        return keywords.to_vec();
    }

    if label.is_empty() {
        Vec::new()
    } else {
        vec![label]
    }
}
