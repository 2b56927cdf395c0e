//! Variable resolution engine
//!
//! Resolves `{{variable}}` references pass by pass. Each pass substitutes
//! every token currently in the text with its literal value; values that
//! contain further tokens are only expanded on the next pass.

use std::borrow::Cow;

use indexmap::IndexSet;
use stencil_domain::{DomainResult, ResolverSettings, VariableSnapshot};
use tracing::{debug, trace};

use super::cycle::CycleDetector;
use super::error::ResolutionError;
use super::parser::{VariableReference, has_variables, scan};

/// Successful outcome of a resolution call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The fully substituted text.
    pub resolved: String,

    /// Nesting depth reached: substitution passes after the first one.
    ///
    /// `{{a}}` with `a = "{{b}}"`, `b = "{{c}}"`, `c = "final"` has depth 2.
    pub depth: usize,

    /// Distinct variable names that were substituted, in pass order.
    pub substituted: Vec<String>,
}

impl Resolution {
    /// Returns true if the input contained no references at all.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.substituted.is_empty()
    }
}

/// The variable resolution engine.
///
/// Holds only its settings. Every call works on its own local state, so a
/// single resolver can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VariableResolver {
    settings: ResolverSettings,
}

impl VariableResolver {
    /// Creates a resolver with the given settings.
    ///
    /// The settings are taken as-is; use [`Self::try_new`] for settings read
    /// from a file or another outside source.
    #[must_use]
    pub const fn new(settings: ResolverSettings) -> Self {
        Self { settings }
    }

    /// Creates a resolver after validating the settings.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidSetting` if `max_depth` is zero.
    pub fn try_new(settings: ResolverSettings) -> DomainResult<Self> {
        settings.validate()?;
        Ok(Self::new(settings))
    }

    /// Returns the resolver settings.
    #[must_use]
    pub const fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Maximum nesting depth per call.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.settings.max_depth
    }

    /// Resolves all variables in `input` against `variables`.
    ///
    /// # Errors
    /// Returns the first `ResolutionError` hit. No partial text is returned.
    pub fn resolve(
        &self,
        input: &str,
        variables: &VariableSnapshot,
    ) -> Result<String, ResolutionError> {
        self.resolve_with_report(input, variables)
            .map(|resolution| resolution.resolved)
    }

    /// Resolves all variables and reports how the result was reached.
    ///
    /// # Errors
    /// - `UndefinedVariable` if a referenced name is not in `variables`.
    /// - `CircularReference` if a name comes back in a later pass.
    /// - `MaxDepthExceeded` if tokens still remain after the pass at depth
    ///   `max_depth`. This wins over anything wrong with those tokens.
    pub fn resolve_with_report(
        &self,
        input: &str,
        variables: &VariableSnapshot,
    ) -> Result<Resolution, ResolutionError> {
        let limit = self.settings.max_depth;
        let mut detector = CycleDetector::new();
        let mut text = Cow::Borrowed(input);

        if !has_variables(&text) {
            return Ok(Resolution {
                resolved: text.into_owned(),
                depth: 0,
                substituted: Vec::new(),
            });
        }

        loop {
            let depth = detector.passes();
            let next = substitute_pass(&text, scan(&text), variables, &mut detector)
                .map_err(log_failure)?;
            detector.finish_pass();
            text = Cow::Owned(next);

            if !has_variables(&text) {
                trace!(depth, "variable resolution complete");
                return Ok(Resolution {
                    resolved: text.into_owned(),
                    depth,
                    substituted: detector.substituted(),
                });
            }

            // The ceiling is checked once the pass has substituted.
            if depth >= limit {
                return Err(log_failure(ResolutionError::max_depth(limit)));
            }
        }
    }

    /// Lists names referenced directly in `input` that `variables` lacks.
    ///
    /// Only the text as given is inspected; names introduced by
    /// substitution are not followed. Order is kept, duplicates dropped.
    #[must_use]
    pub fn find_undefined(input: &str, variables: &VariableSnapshot) -> Vec<String> {
        scan(input)
            .map(|reference| reference.name)
            .filter(|name| !variables.contains(name))
            .collect::<IndexSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}

/// Runs one pass over `text`, copying each token's value in literally.
fn substitute_pass<'v, 't>(
    text: &str,
    tokens: impl Iterator<Item = VariableReference<'t>>,
    variables: &'v VariableSnapshot,
    detector: &mut CycleDetector<'v>,
) -> Result<String, ResolutionError> {
    let mut output = String::with_capacity(text.len());
    let mut last_end = 0;
    let mut count = 0_usize;

    for token in tokens {
        let Some((name, value)) = variables.get_key_value(token.name) else {
            return Err(ResolutionError::undefined(token.name));
        };

        if detector.seen_in_prior_pass(name) {
            return Err(ResolutionError::circular(detector.cycle_path(name)));
        }
        detector.record(name);

        output.push_str(&text[last_end..token.span.start]);
        output.push_str(value);
        last_end = token.span.end;
        count += 1;
    }

    output.push_str(&text[last_end..]);
    trace!(depth = detector.passes(), tokens = count, "substitution pass");
    Ok(output)
}

fn log_failure(error: ResolutionError) -> ResolutionError {
    debug!(kind = error.kind(), %error, "variable resolution failed");
    error
}
