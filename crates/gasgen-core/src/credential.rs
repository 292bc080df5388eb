//! Gemini API credential.
//!
//! A [`Credential`] can only be constructed from a string that matches the
//! shape of a Gemini API key, so holding one means the local check passed.
//! Whether the upstream service actually accepts it is only known after the
//! first generation call.

use crate::error::{GasgenError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Fixed prefix every Gemini API key starts with.
pub const CREDENTIAL_PREFIX: &str = "AIza";

/// Total length of a Gemini API key, prefix included.
pub const CREDENTIAL_LEN: usize = 39;

static CREDENTIAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^AIza[0-9A-Za-z_-]{35}$").expect("credential pattern is a valid regex")
});

/// Returns true when the trimmed input has the shape of a Gemini API key.
pub fn is_valid_shape(raw: &str) -> bool {
    CREDENTIAL_PATTERN.is_match(raw.trim())
}

/// A locally validated API key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Validates and wraps a raw key. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GasgenError::auth(
                "No API key is set. Enter a valid Gemini API key.",
            ));
        }
        if !is_valid_shape(trimmed) {
            return Err(GasgenError::auth(format!(
                "Enter a valid Gemini API key. Keys are {} characters long and start with \"{}\".",
                CREDENTIAL_LEN, CREDENTIAL_PREFIX
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The raw key, for use as the request's authentication parameter only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({}…)", CREDENTIAL_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_with_body(body: &str) -> String {
        format!("{}{}", CREDENTIAL_PREFIX, body)
    }

    #[test]
    fn test_accepts_prefix_plus_35_token_chars() {
        let key = key_with_body(&"aB3_-".repeat(7));
        assert_eq!(key.len(), CREDENTIAL_LEN);
        assert!(is_valid_shape(&key));
        assert!(Credential::parse(&key).is_ok());
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let key = key_with_body(&"x".repeat(35));
        let credential = Credential::parse(&format!("  {}\n", key)).unwrap();
        assert_eq!(credential.expose(), key);
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_valid_shape(&key_with_body(&"x".repeat(34))));
        assert!(!is_valid_shape(&key_with_body(&"x".repeat(36))));
    }

    #[test]
    fn test_rejects_invalid_character() {
        let mut body = "x".repeat(34);
        body.push('!');
        assert!(!is_valid_shape(&key_with_body(&body)));
    }

    #[test]
    fn test_rejects_wrong_prefix() {
        assert!(!is_valid_shape(&format!("AIzb{}", "x".repeat(35))));
    }

    #[test]
    fn test_empty_is_auth_error() {
        let err = Credential::parse("   ").unwrap_err();
        assert!(err.is_auth());
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = key_with_body(&"s".repeat(35));
        let credential = Credential::parse(&key).unwrap();
        let debug = format!("{:?}", credential);
        assert!(!debug.contains(&"s".repeat(35)));
    }
}
