//! Shared primitives used across Sprig crates.

use core::fmt;

/// Result alias used across the workspace.
pub type SprigResult<T> = Result<T, SprigError>;

/// Top-level error type for the fallible edges of the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprigError {
    pub code: &'static str,
    pub message: String,
}

impl SprigError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for SprigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for SprigError {}

/// Converts a hyphenated key to the camel-cased form used by dataset APIs.
///
/// A hyphen is folded only when followed by an ASCII lowercase letter or
/// digit; any other hyphen passes through untouched.
pub fn camel_case_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '-' {
            if let Some(next) = chars.peek().copied() {
                if next.is_ascii_lowercase() || next.is_ascii_digit() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }

    out
}

/// Converts a camel-cased dataset key back to its hyphenated attribute form.
pub fn kebab_case_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len().saturating_add(4));

    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::SprigError;
    use super::camel_case_key;
    use super::kebab_case_key;

    #[test]
    fn camel_cases_hyphenated_keys() {
        assert_eq!(camel_case_key("foo-bar"), "fooBar");
        assert_eq!(camel_case_key("foo-bar-baz"), "fooBarBaz");
        assert_eq!(camel_case_key("foo-1x"), "foo1x");
    }

    #[test]
    fn leaves_unfoldable_hyphens_alone() {
        assert_eq!(camel_case_key("foo-"), "foo-");
        assert_eq!(camel_case_key("foo--bar"), "foo-Bar");
        assert_eq!(camel_case_key("already"), "already");
    }

    #[test]
    fn kebab_cases_camel_keys() {
        assert_eq!(kebab_case_key("fooBar"), "foo-bar");
        assert_eq!(kebab_case_key("fooBarBaz"), "foo-bar-baz");
        assert_eq!(kebab_case_key("plain"), "plain");
    }

    #[test]
    fn dataset_key_round_trips() {
        assert_eq!(camel_case_key(&kebab_case_key("fooBar")), "fooBar");
        assert_eq!(kebab_case_key(&camel_case_key("foo-bar")), "foo-bar");
    }

    #[test]
    fn error_displays_code_and_message() {
        let error = SprigError::new("viewer.export.write_failed", "disk full");
        assert_eq!(
            error.to_string(),
            "viewer.export.write_failed: disk full"
        );
    }
}
