//! # gather-api
//!
//! Read-only REST API built with Axum: event listings, matched micro-meets,
//! the feed and communities, each enriched for the acting user.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
