//! Stencil Domain - Core types
//!
//! This crate defines the data the variable resolver works on.
//! All types here are pure Rust with no I/O dependencies.

pub mod environment;
pub mod error;
pub mod settings;

pub use environment::{Environment, Variable, VariableMap, VariableSnapshot};
pub use error::{DomainError, DomainResult};
pub use settings::{MAX_RESOLUTION_DEPTH, ResolverSettings};
