//! Event entity - a hosted event or a micro-meet

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::value_objects::{EventId, UserId};

/// Group size assumed when an event does not set `max_spots`
pub const DEFAULT_MAX_SPOTS: i32 = 6;

/// Publication status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStatus {
    Draft,
    Active,
    Cancelled,
    Completed,
}

impl EventStatus {
    /// Database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Parse the database representation, `None` for unknown values
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(Self::Draft),
            "active" => Some(Self::Active),
            "cancelled" => Some(Self::Cancelled),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Event entity
///
/// Micro-meets are small curated events (`is_micro_meet`) and are the only
/// events that receive a compatibility score. Optional fields are untrusted
/// input and may be missing or malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub host_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// ISO-8601 date or date-time, kept as text since it may not parse
    pub date: Option<String>,
    pub price: Option<f64>,
    pub max_spots: Option<i32>,
    pub is_micro_meet: bool,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Create an active regular event with only the required fields
    pub fn new(id: EventId, host_id: UserId, title: String, category: String) -> Self {
        Self {
            id,
            host_id,
            title,
            description: None,
            category,
            location: None,
            latitude: None,
            longitude: None,
            date: None,
            price: None,
            max_spots: None,
            is_micro_meet: false,
            status: EventStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Group size, falling back to [`DEFAULT_MAX_SPOTS`] when unset or non-positive
    pub fn spots(&self) -> i32 {
        match self.max_spots {
            Some(spots) if spots > 0 => spots,
            _ => DEFAULT_MAX_SPOTS,
        }
    }

    /// Both coordinates are present
    #[inline]
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Price if it is a usable non-negative number
    pub fn valid_price(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite() && *p >= 0.0)
    }

    /// Calendar date of the event, `None` when missing or unparsable
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS`.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc).date_naive());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|ts| ts.date())
    }
}
