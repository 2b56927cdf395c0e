//! Environment variable types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::name::is_valid_variable_name;
use super::snapshot::VariableSnapshot;
use crate::error::{DomainError, DomainResult};

/// Represents a single variable with its value and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// The variable value. May itself contain `{{name}}` references.
    pub value: String,

    /// Marks the value as sensitive so hosts can mask it when displaying.
    #[serde(default)]
    pub secret: bool,

    /// Whether this variable takes part in resolution.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl Variable {
    /// Creates a new non-secret variable.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            secret: false,
            enabled: true,
        }
    }

    /// Creates a new secret variable.
    #[must_use]
    pub fn secret(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            secret: true,
            enabled: true,
        }
    }

    /// Creates a disabled variable.
    #[must_use]
    pub fn disabled(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            secret: false,
            enabled: false,
        }
    }

    /// Returns the value if the variable is enabled.
    #[must_use]
    pub fn enabled_value(&self) -> Option<&str> {
        self.enabled.then_some(self.value.as_str())
    }
}

impl Default for Variable {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// A collection of variables keyed by name.
pub type VariableMap = HashMap<String, Variable>;

/// A named, flat set of variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Unique identifier
    pub id: Uuid,
    /// Environment name (e.g., "Development", "Production")
    pub name: String,
    /// Schema version for migration support.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// Variables in this environment.
    #[serde(default)]
    pub variables: VariableMap,
}

const fn default_schema_version() -> u32 {
    1
}

impl Environment {
    /// Creates a new environment with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            schema_version: default_schema_version(),
            variables: HashMap::new(),
        }
    }

    /// Adds or updates a variable in this environment.
    pub fn set_variable(&mut self, name: impl Into<String>, variable: Variable) {
        self.variables.insert(name.into(), variable);
    }

    /// Adds a plain variable with name and value.
    pub fn add_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.set_variable(name, Variable::new(value));
    }

    /// Adds a secret variable with name and value.
    pub fn add_secret(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.set_variable(name, Variable::secret(value));
    }

    /// Adds or updates a variable after checking its name can be referenced.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidVariableName` if `name` does not match
    /// `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn try_set_variable(
        &mut self,
        name: impl Into<String>,
        variable: Variable,
    ) -> DomainResult<()> {
        let name = name.into();
        if !is_valid_variable_name(&name) {
            return Err(DomainError::InvalidVariableName(name));
        }
        self.variables.insert(name, variable);
        Ok(())
    }

    /// Names that can never be referenced from a template, sorted.
    #[must_use]
    pub fn unreferenceable_variable_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .variables
            .keys()
            .map(String::as_str)
            .filter(|name| !is_valid_variable_name(name))
            .collect();
        names.sort_unstable();
        names
    }

    /// Gets a variable by name.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Removes a variable by name.
    pub fn remove_variable(&mut self, name: &str) -> Option<Variable> {
        self.variables.remove(name)
    }

    /// Returns the number of variables in this environment.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Returns names of all variables marked as secret, sorted.
    #[must_use]
    pub fn secret_variable_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .variables
            .iter()
            .filter(|(_, v)| v.secret)
            .map(|(k, _)| k.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Looks up the value of an enabled variable.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.get_variable(name).and_then(Variable::enabled_value)
    }

    /// Takes a read-only snapshot of the enabled variables.
    ///
    /// Later changes to this environment do not affect the snapshot.
    #[must_use]
    pub fn snapshot(&self) -> VariableSnapshot {
        self.variables
            .iter()
            .filter_map(|(name, var)| {
                var.enabled_value()
                    .map(|value| (name.clone(), value.to_owned()))
            })
            .collect()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new("New Environment")
    }
}
