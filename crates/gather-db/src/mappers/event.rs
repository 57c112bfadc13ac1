//! Event model -> entity mapper

use gather_core::entities::{Event, EventStatus};
use gather_core::value_objects::{EventId, UserId};

use crate::models::EventModel;

/// Parse a stored status; unknown values are treated as unpublished
pub fn status_or_draft(value: &str) -> EventStatus {
    EventStatus::parse(value).unwrap_or(EventStatus::Draft)
}

/// Convert EventModel to Event entity
impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: EventId::new(model.id),
            host_id: UserId::new(model.host_id),
            title: model.title,
            description: model.description,
            category: model.category,
            location: model.location,
            latitude: model.latitude,
            longitude: model.longitude,
            date: model.date,
            price: model.price,
            max_spots: model.max_spots,
            is_micro_meet: model.is_micro_meet,
            status: status_or_draft(&model.status),
            created_at: model.created_at,
        }
    }
}
