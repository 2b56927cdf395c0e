//! Resolution failures

use thiserror::Error;

/// The single failure a resolution call can end with.
///
/// A failed call never returns partially substituted text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// A referenced name is missing from the snapshot.
    #[error("Variable {{{{{name}}}}} is not defined in current environment.")]
    UndefinedVariable {
        /// The missing variable name.
        name: String,
    },

    /// A substitution chain came back to a name it had already substituted.
    #[error("Circular variable reference detected: {path}")]
    CircularReference {
        /// Names in substitution order, ending with the repeated one,
        /// joined with `" → "`.
        path: String,
    },

    /// Tokens were still present after the last allowed pass.
    #[error("Maximum variable resolution depth of {limit} exceeded")]
    MaxDepthExceeded {
        /// The pass ceiling that was hit.
        limit: usize,
    },
}

impl ResolutionError {
    /// Creates an `UndefinedVariable` error.
    #[must_use]
    pub fn undefined(name: impl Into<String>) -> Self {
        Self::UndefinedVariable { name: name.into() }
    }

    /// Creates a `CircularReference` error.
    #[must_use]
    pub fn circular(path: impl Into<String>) -> Self {
        Self::CircularReference { path: path.into() }
    }

    /// Creates a `MaxDepthExceeded` error.
    #[must_use]
    pub const fn max_depth(limit: usize) -> Self {
        Self::MaxDepthExceeded { limit }
    }

    /// Short machine-friendly name of the failure kind, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UndefinedVariable { .. } => "undefined_variable",
            Self::CircularReference { .. } => "circular_reference",
            Self::MaxDepthExceeded { .. } => "max_depth_exceeded",
        }
    }
}
