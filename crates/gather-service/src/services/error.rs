//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use gather_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or repository failure
    Domain(DomainError),

    /// A batched relation lookup failed; nothing from the batch is returned
    LoadFailed {
        resource: &'static str,
        source: DomainError,
    },

    /// Validation error
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::LoadFailed { resource, .. } => write!(f, "Failed to load {resource}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) | Self::LoadFailed { source: e, .. } => Some(e),
            Self::Validation(_) => None,
        }
    }
}

impl ServiceError {
    /// Wrap a failed batch lookup
    pub fn load_failed(resource: &'static str, source: DomainError) -> Self {
        Self::LoadFailed { resource, source }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) if e.is_not_found() => 404,
            Self::Validation(_) => 400,
            Self::Domain(_) | Self::LoadFailed { .. } => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::LoadFailed { .. } => "LOAD_FAILED",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
