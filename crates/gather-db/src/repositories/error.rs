//! Error handling utilities for repositories

use gather_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    tracing::warn!(error = %e, "database query failed");
    DomainError::DatabaseError(e.to_string())
}
