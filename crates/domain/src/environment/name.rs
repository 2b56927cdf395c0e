//! Variable name grammar: `[A-Za-z_][A-Za-z0-9_]*`

/// Returns true if `byte` may start a variable name.
#[must_use]
pub const fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Returns true if `byte` may continue a variable name.
#[must_use]
pub const fn is_name_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Validates a variable name against the identifier grammar.
///
/// ```
/// use stencil_domain::environment::is_valid_variable_name;
///
/// assert!(is_valid_variable_name("base_url"));
/// assert!(!is_valid_variable_name("2fa"));
/// ```
#[must_use]
pub fn is_valid_variable_name(name: &str) -> bool {
    match name.as_bytes().split_first() {
        Some((&first, rest)) => is_name_start(first) && rest.iter().all(|&b| is_name_continue(b)),
        None => false,
    }
}
