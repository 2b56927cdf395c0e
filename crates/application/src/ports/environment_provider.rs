//! Environment provider port
//!
//! Defines how the application obtains the variables of the active
//! environment. Selection, persistence and editing of environments live
//! behind this trait.

use async_trait::async_trait;

use stencil_domain::VariableSnapshot;

/// Errors that can occur while fetching the active environment.
#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    /// No environment is currently selected.
    #[error("No active environment selected")]
    NoActiveEnvironment,

    /// The provider could not produce a snapshot.
    #[error("Environment unavailable: {0}")]
    Unavailable(String),
}

/// A consistent copy of the active environment's variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    /// Name of the environment the snapshot was taken from.
    pub environment_name: String,
    /// The enabled variables at the time the snapshot was taken.
    pub variables: VariableSnapshot,
}

impl ActiveSnapshot {
    /// Creates a new snapshot record.
    #[must_use]
    pub fn new(environment_name: impl Into<String>, variables: VariableSnapshot) -> Self {
        Self {
            environment_name: environment_name.into(),
            variables,
        }
    }
}

/// Supplies the active environment to resolution use cases.
#[async_trait]
pub trait EnvironmentProvider: Send + Sync {
    /// Takes a snapshot of the active environment.
    ///
    /// The returned value must not change if the active environment is
    /// edited or switched afterwards.
    ///
    /// # Errors
    /// Returns `EnvironmentError::NoActiveEnvironment` if nothing is selected.
    async fn active_snapshot(&self) -> Result<ActiveSnapshot, EnvironmentError>;
}
