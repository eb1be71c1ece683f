use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::LocationError;

/// Scheme prefixed onto input that carries none of the recognized schemes.
pub const DEFAULT_SCHEME: &str = "https";

/// Schemes accepted as-is when they lead the input.
pub const RECOGNIZED_SCHEMES: &[&str] = &["http", "https", "about", "file", "data"];

/// An absolute, scheme-qualified resource address.
///
/// Construct one with [`Location::normalize`] (user input) or
/// [`Location::from_resolved`] (an address reported back by a content view).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Normalizes raw address-bar input using the default scheme set.
    pub fn parse(raw: &str) -> Result<Self, LocationError> {
        Self::normalize(raw, DEFAULT_SCHEME, RECOGNIZED_SCHEMES)
    }

    /// Normalizes raw input: trims it and, unless it already starts with one of
    /// `recognized` followed by `:`, prefixes `default_scheme://`.
    ///
    /// # Examples
    /// - `"example.com"` → `"https://example.com"`
    /// - `"about:blank"` → `"about:blank"`
    /// - `"HTTP://Example.com"` → `"HTTP://Example.com"`
    pub fn normalize<S: AsRef<str>>(
        raw: &str,
        default_scheme: &str,
        recognized: &[S],
    ) -> Result<Self, LocationError> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(LocationError::Empty);
        }

        if has_recognized_scheme(input, recognized) {
            Ok(Self(input.to_string()))
        } else {
            Ok(Self(format!("{}://{}", default_scheme, input)))
        }
    }

    /// Wraps an address reported by a content view. Views only ever report
    /// absolute addresses, so no normalization happens here.
    pub fn from_resolved(resolved: impl Into<String>) -> Self {
        Self(resolved.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path form used for host history entries: `?url=<percent-encoded>`.
    pub fn display_path(&self) -> String {
        format!("?url={}", urlencoding::encode(&self.0))
    }
}

/// Whether `s` can stand as a scheme: a letter followed by letters, digits,
/// `+`, `-` or `.`.
pub fn is_scheme_token(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

fn has_recognized_scheme<S: AsRef<str>>(input: &str, recognized: &[S]) -> bool {
    let Some((scheme, _)) = input.split_once(':') else {
        return false;
    };
    recognized
        .iter()
        .any(|known| known.as_ref().eq_ignore_ascii_case(scheme))
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
