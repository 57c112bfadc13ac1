//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod communities;
pub mod events;
pub mod feed;
pub mod health;
