//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A variable name does not match the identifier grammar.
    #[error("invalid variable name: {0}")]
    InvalidVariableName(String),

    /// A settings value is out of range.
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
