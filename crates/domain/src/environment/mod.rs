//! Environment and variable domain types

mod name;
mod snapshot;
mod variable;

pub use name::{is_name_continue, is_name_start, is_valid_variable_name};
pub use snapshot::VariableSnapshot;
pub use variable::{Environment, Variable, VariableMap};
