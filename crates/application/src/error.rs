//! Application error types

use thiserror::Error;
use stencil_domain::DomainError;

use crate::ports::EnvironmentError;
use crate::use_cases::ResolveTemplatesError;
use crate::variable_resolver::ResolutionError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Variable resolution failed.
    #[error("resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    /// The environment provider failed.
    #[error("environment error: {0}")]
    Environment(#[from] EnvironmentError),

    /// A named template failed to resolve.
    #[error("template error: {0}")]
    Templates(#[from] ResolveTemplatesError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
