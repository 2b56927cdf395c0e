//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.

mod environment_provider;

pub use environment_provider::{ActiveSnapshot, EnvironmentError, EnvironmentProvider};
