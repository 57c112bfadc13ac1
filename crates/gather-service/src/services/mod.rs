//! Business logic services
//!
//! Services borrow a [`ServiceContext`] and orchestrate repository reads,
//! enrichment and matching for a single request.

pub mod context;
pub mod discovery;
pub mod enrichment;
pub mod error;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use discovery::DiscoveryService;
pub use enrichment::EnrichmentService;
pub use error::{ServiceError, ServiceResult};
