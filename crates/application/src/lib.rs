//! Stencil Application - Variable resolution and use cases
//!
//! This crate defines:
//! - The `{{variable}}` scanner and the multi-pass resolution engine
//! - Port traits for the environment provider
//! - Use case orchestration
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;
pub mod variable_resolver;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{ActiveSnapshot, EnvironmentError, EnvironmentProvider};
pub use use_cases::{
    ResolveTemplates, ResolveTemplatesError, ResolveTemplatesInput, ResolveTemplatesOutput,
    Template,
};
pub use variable_resolver::{
    Resolution, ResolutionError, VariableResolver, extract_variables, has_variables, resolve,
};
