//! Event database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: String,
    pub host_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub date: Option<String>,
    pub price: Option<f64>,
    pub max_spots: Option<i32>,
    pub is_micro_meet: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// RSVP count per event (from a grouped query)
#[derive(Debug, Clone, FromRow)]
pub struct AttendeeCountModel {
    pub event_id: String,
    pub count: i64,
}
