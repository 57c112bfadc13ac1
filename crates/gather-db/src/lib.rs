//! # gather-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `gather-core`. It handles:
//!
//! - Connection pool management and schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! Relation lookups (`count_by_*`, `find_joined`, `find_saved`, `find_by_posts`)
//! bind the whole id batch as one array parameter, so each is a single round trip.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gather_db::pool::{create_pool, DatabaseConfig};
//! use gather_db::repositories::PgEventRepository;
//! use gather_core::traits::{EventQuery, EventRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let events = PgEventRepository::new(pool);
//!     let upcoming = events.find_active(&EventQuery::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{apply_schema, create_pool, create_pool_from_env, ping, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommunityRepository, PgEventRepository, PgMembershipRepository, PgPostRepository,
    PgProfileRepository, PgReactionRepository, PgRsvpRepository, PgSavedEventRepository,
};
