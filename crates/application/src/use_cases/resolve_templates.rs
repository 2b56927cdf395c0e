//! Resolve templates use case
//!
//! Resolves the text fields of a request (URL, header values, body, ...)
//! against one snapshot of the active environment.

use tracing::debug;

use crate::ports::{EnvironmentError, EnvironmentProvider};
use crate::variable_resolver::{ResolutionError, VariableResolver};

/// Errors that can occur when resolving templates.
#[derive(Debug, thiserror::Error)]
pub enum ResolveTemplatesError {
    /// The active environment could not be read.
    #[error("Failed to read active environment: {0}")]
    Environment(#[from] EnvironmentError),

    /// One of the templates failed to resolve.
    #[error("Failed to resolve {field}: {source}")]
    Resolution {
        /// Field name of the failing template.
        field: String,
        /// The resolution failure.
        #[source]
        source: ResolutionError,
    },
}

/// A named piece of text to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Field the text belongs to, e.g. `url` or `header:Authorization`.
    pub field: String,
    /// The raw text with `{{variable}}` references.
    pub text: String,
}

impl Template {
    /// Creates a new template.
    #[must_use]
    pub fn new(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            text: text.into(),
        }
    }
}

/// Input for the use case.
#[derive(Debug, Clone, Default)]
pub struct ResolveTemplatesInput {
    /// Templates in the order they should be resolved.
    pub templates: Vec<Template>,
}

impl ResolveTemplatesInput {
    /// Creates an empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a template.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, text: impl Into<String>) -> Self {
        self.templates.push(Template::new(field, text));
        self
    }
}

/// Output containing every template fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveTemplatesOutput {
    /// Environment the snapshot was taken from.
    pub environment_name: String,
    /// Resolved templates, same order as the input.
    pub resolved: Vec<Template>,
}

impl ResolveTemplatesOutput {
    /// Returns the resolved text for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.resolved
            .iter()
            .find(|t| t.field == field)
            .map(|t| t.text.as_str())
    }
}

/// Resolves request templates against the active environment.
pub struct ResolveTemplates<P> {
    provider: P,
    resolver: VariableResolver,
}

impl<P: EnvironmentProvider> ResolveTemplates<P> {
    /// Creates the use case with the default resolver.
    pub fn new(provider: P) -> Self {
        Self::with_resolver(provider, VariableResolver::default())
    }

    /// Creates the use case with a configured resolver.
    pub const fn with_resolver(provider: P, resolver: VariableResolver) -> Self {
        Self { provider, resolver }
    }

    /// Returns the resolver in use.
    pub const fn resolver(&self) -> &VariableResolver {
        &self.resolver
    }

    /// Executes the use case.
    ///
    /// Takes one snapshot and resolves every template against it.
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be taken or if any template
    /// fails to resolve. Nothing is returned for the other templates then.
    pub async fn execute(
        &self,
        input: ResolveTemplatesInput,
    ) -> Result<ResolveTemplatesOutput, ResolveTemplatesError> {
        let snapshot = self.provider.active_snapshot().await?;
        debug!(
            environment = %snapshot.environment_name,
            templates = input.templates.len(),
            "resolving templates"
        );

        let resolved = input
            .templates
            .into_iter()
            .map(|template| {
                match self.resolver.resolve(&template.text, &snapshot.variables) {
                    Ok(text) => Ok(Template {
                        field: template.field,
                        text,
                    }),
                    Err(source) => Err(ResolveTemplatesError::Resolution {
                        field: template.field,
                        source,
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ResolveTemplatesOutput {
            environment_name: snapshot.environment_name,
            resolved,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ports::ActiveSnapshot;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use stencil_domain::environment::Environment;

    struct MockProvider {
        active: Mutex<Option<Environment>>,
        calls: AtomicUsize,
    }

    impl MockProvider {
        fn new(env: Option<Environment>) -> Self {
            Self {
                active: Mutex::new(env),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl EnvironmentProvider for MockProvider {
        async fn active_snapshot(&self) -> Result<ActiveSnapshot, EnvironmentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let active = self.active.lock().expect("Lock poisoned");
            active
                .as_ref()
                .map(|env| ActiveSnapshot::new(env.name.clone(), env.snapshot()))
                .ok_or(EnvironmentError::NoActiveEnvironment)
        }
    }

    fn development() -> Environment {
        let mut env = Environment::new("development");
        env.add_variable("host", "localhost");
        env.add_variable("base_url", "http://{{host}}:3000");
        env.add_secret("token", "sk-123");
        env
    }

    #[tokio::test]
    async fn test_resolves_all_templates() {
        let use_case = ResolveTemplates::new(MockProvider::new(Some(development())));

        let input = ResolveTemplatesInput::new()
            .with("url", "{{base_url}}/users")
            .with("header:Authorization", "Bearer {{token}}")
            .with("body", r#"{"static": true}"#);

        let output = use_case.execute(input).await.unwrap();
        assert_eq!(output.environment_name, "development");
        assert_eq!(output.get("url"), Some("http://localhost:3000/users"));
        assert_eq!(output.get("header:Authorization"), Some("Bearer sk-123"));
        assert_eq!(output.get("body"), Some(r#"{"static": true}"#));
        assert_eq!(output.resolved.len(), 3);
    }

    #[tokio::test]
    async fn test_takes_one_snapshot_per_execution() {
        let provider = MockProvider::new(Some(development()));
        let use_case = ResolveTemplates::new(provider);

        let input = ResolveTemplatesInput::new()
            .with("a", "{{host}}")
            .with("b", "{{host}}");
        use_case.execute(input).await.unwrap();

        assert_eq!(use_case.provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_names_the_field() {
        let use_case = ResolveTemplates::new(MockProvider::new(Some(development())));

        let input = ResolveTemplatesInput::new()
            .with("url", "{{base_url}}")
            .with("header:X-Api-Key", "{{api_key}}");

        match use_case.execute(input).await {
            Err(ResolveTemplatesError::Resolution { field, source }) => {
                assert_eq!(field, "header:X-Api-Key");
                assert_eq!(source, ResolutionError::undefined("api_key"));
            }
            other => panic!("Expected resolution error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_active_environment() {
        let use_case = ResolveTemplates::new(MockProvider::new(None));

        let result = use_case
            .execute(ResolveTemplatesInput::new().with("url", "{{host}}"))
            .await;
        assert!(matches!(
            result,
            Err(ResolveTemplatesError::Environment(
                EnvironmentError::NoActiveEnvironment
            ))
        ));
    }

    #[tokio::test]
    async fn test_disabled_variable_is_undefined() {
        let mut env = development();
        env.set_variable("host", stencil_domain::Variable::disabled("localhost"));
        let use_case = ResolveTemplates::new(MockProvider::new(Some(env)));

        let err = use_case
            .execute(ResolveTemplatesInput::new().with("url", "{{base_url}}"))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to resolve url: Variable {{host}} is not defined in current environment."
        );
    }

    #[tokio::test]
    async fn test_custom_resolver_depth() {
        let resolver =
            VariableResolver::try_new(stencil_domain::ResolverSettings::with_max_depth(1))
                .unwrap();
        let mut env = development();
        env.add_variable("users_url", "{{base_url}}/users");
        let use_case = ResolveTemplates::with_resolver(MockProvider::new(Some(env)), resolver);
        assert_eq!(use_case.resolver().max_depth(), 1);

        let ok = use_case
            .execute(ResolveTemplatesInput::new().with("url", "{{base_url}}"))
            .await
            .unwrap();
        assert_eq!(ok.get("url"), Some("http://localhost:3000"));

        let err = use_case
            .execute(ResolveTemplatesInput::new().with("url", "{{users_url}}"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveTemplatesError::Resolution {
                source: ResolutionError::MaxDepthExceeded { limit: 1 },
                ..
            }
        ));
    }
}
