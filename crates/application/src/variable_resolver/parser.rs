//! Variable parser for `{{variable}}` syntax
//!
//! A single forward scan over the input bytes. Anything that is not a
//! well-formed `{{identifier}}` token is literal text: a lone `{`, an
//! unterminated `{{name`, a stray `}}`, `{{}}` and `{{ name }}` are all
//! skipped without being reported.

use std::iter::FusedIterator;
use std::ops::Range;

use stencil_domain::environment::{is_name_continue, is_name_start};

pub use stencil_domain::environment::is_valid_variable_name;

/// Represents a parsed variable reference in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference<'a> {
    /// The variable name (without `{{ }}`).
    pub name: &'a str,

    /// Byte range in the original string covering the whole token.
    pub span: Range<usize>,
}

/// Lazy iterator over the tokens of a string, left to right.
///
/// Created by [`scan`].
#[derive(Debug, Clone)]
pub struct References<'a> {
    input: &'a str,
    pos: usize,
}

/// Starts scanning `input` for variable references.
#[must_use]
pub const fn scan(input: &str) -> References<'_> {
    References { input, pos: 0 }
}

impl<'a> Iterator for References<'a> {
    type Item = VariableReference<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.input.as_bytes();

        while self.pos + 1 < bytes.len() {
            let start = self.pos;
            if bytes[start] != b'{' || bytes[start + 1] != b'{' {
                self.pos += 1;
                continue;
            }

            let name_start = start + 2;
            let mut name_end = name_start;
            if name_end < bytes.len() && is_name_start(bytes[name_end]) {
                name_end += 1;
                while name_end < bytes.len() && is_name_continue(bytes[name_end]) {
                    name_end += 1;
                }
            }

            if name_end == name_start {
                // "{{" not followed by a name; the second brace may open a token.
                self.pos = start + 1;
                continue;
            }

            if bytes.get(name_end) == Some(&b'}') && bytes.get(name_end + 1) == Some(&b'}') {
                let end = name_end + 2;
                self.pos = end;
                return Some(VariableReference {
                    name: &self.input[name_start..name_end],
                    span: start..end,
                });
            }

            // Name bytes never contain a brace, so no token can start inside them.
            self.pos = name_end;
        }

        self.pos = bytes.len();
        None
    }
}

impl FusedIterator for References<'_> {}

/// Parses a string and extracts all variable references with their spans.
///
/// # Examples
///
/// ```
/// use stencil_application::variable_resolver::parser::parse_variables;
///
/// let refs = parse_variables("Hello {{name}}, {not} {{ spaced }}");
/// assert_eq!(refs.len(), 1);
/// assert_eq!(refs[0].name, "name");
/// assert_eq!(refs[0].span, 6..14);
/// ```
#[must_use]
pub fn parse_variables(input: &str) -> Vec<VariableReference<'_>> {
    scan(input).collect()
}

/// Returns the referenced variable names in occurrence order, duplicates kept.
#[must_use]
pub fn extract_variables(input: &str) -> Vec<String> {
    scan(input).map(|r| r.name.to_owned()).collect()
}

/// Returns true if the input contains at least one well-formed reference.
///
/// Stops at the first token found.
#[must_use]
pub fn has_variables(input: &str) -> bool {
    scan(input).next().is_some()
}
