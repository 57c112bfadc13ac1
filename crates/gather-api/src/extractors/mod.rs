//! Axum extractors for request handling
//!
//! Custom extractors for the acting user and validated query strings.

mod auth;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use validated::ValidatedQuery;
