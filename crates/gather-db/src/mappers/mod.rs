//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions for rows read from PostgreSQL, plus
//! helpers that turn typed ids into array bind parameters.

mod community;
mod event;
mod post;
mod profile;

pub use event::status_or_draft;

use std::fmt::Display;

/// Collect ids into a `TEXT[]` bind parameter
pub fn id_array<T: Display>(ids: &[T]) -> Vec<String> {
    ids.iter().map(ToString::to_string).collect()
}
