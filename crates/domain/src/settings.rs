//! Resolver settings
//!
//! Tunables read by the variable resolver. Hosts typically load these from
//! their own settings file; every field falls back to its default.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Default ceiling on nested substitution passes per resolution call.
pub const MAX_RESOLUTION_DEPTH: usize = 10;

/// Settings for the variable resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverSettings {
    /// Maximum number of substitution passes after the first one.
    ///
    /// This also rejects acyclic chains longer than the limit.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

const fn default_max_depth() -> usize {
    MAX_RESOLUTION_DEPTH
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl ResolverSettings {
    /// Creates settings with a custom pass ceiling.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidSetting` when `max_depth` is zero.
    pub fn validate(&self) -> DomainResult<()> {
        if self.max_depth == 0 {
            return Err(DomainError::InvalidSetting(
                "maxDepth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
