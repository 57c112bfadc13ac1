//! Compatibility matching between users and micro-meets
//!
//! Everything in this module is pure and synchronous: no I/O, no clock reads
//! beyond [`CompatibilityScorer::for_today`], and no failure modes. Missing or
//! malformed event data switches the affected scoring component off.

mod aggregator;
mod location;
mod result;
mod scorer;
pub mod tables;

pub use aggregator::{attach_matches, matched_micro_meets, Matchable, ScoredEvent, MIN_MATCH_SCORE};
pub use location::location_similarity;
pub use result::{EventMatch, MatchResult};
pub use scorer::{score, CompatibilityScorer};
