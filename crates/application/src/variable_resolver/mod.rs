//! Variable resolution module
//!
//! Provides parsing and resolution of `{{variable}}` syntax in strings.
//!
//! # Usage
//!
//! ```
//! use stencil_application::variable_resolver::{self, ResolutionError};
//! use stencil_domain::environment::Environment;
//!
//! let mut env = Environment::new("development");
//! env.add_variable("host", "localhost");
//! env.add_variable("base_url", "http://{{host}}:8080");
//!
//! let snapshot = env.snapshot();
//! let url = variable_resolver::resolve("{{base_url}}/api", &snapshot);
//! assert_eq!(url, Ok("http://localhost:8080/api".to_string()));
//!
//! let missing = variable_resolver::resolve("{{token}}", &snapshot);
//! assert_eq!(missing, Err(ResolutionError::undefined("token")));
//! ```

pub mod cycle;
pub mod engine;
pub mod error;
pub mod parser;

use stencil_domain::VariableSnapshot;

pub use cycle::{CycleDetector, PATH_SEPARATOR};
pub use engine::{Resolution, VariableResolver};
pub use error::ResolutionError;
pub use parser::{
    References, VariableReference, extract_variables, has_variables, is_valid_variable_name,
    parse_variables, scan,
};

/// Resolves `text` against `variables` with the default pass ceiling.
///
/// # Errors
/// See [`VariableResolver::resolve_with_report`].
pub fn resolve(text: &str, variables: &VariableSnapshot) -> Result<String, ResolutionError> {
    VariableResolver::default().resolve(text, variables)
}
