//! Bearer Token
//!
//! Opaque credential issued by the API at login. Never printed; the
//! buffer is wiped when the last copy is dropped.

use std::fmt;

use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::SessionError;

/// A blank token never deserializes; the persisted form rejects it too.
#[derive(Clone, PartialEq, Eq, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(try_from = "String")]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token text, for the `Authorization` header and persistence only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Log-safe label, see [`platform::crypto::token_fingerprint`]
    pub fn fingerprint(&self) -> String {
        platform::crypto::token_fingerprint(&self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BearerToken({})", self.fingerprint())
    }
}

impl From<&str> for BearerToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl TryFrom<String> for BearerToken {
    type Error = SessionError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        if token.trim().is_empty() {
            return Err(SessionError::EmptyField("token"));
        }
        Ok(Self(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expose_returns_exact_text() {
        let token = BearerToken::new("abc123");
        assert_eq!(token.expose(), "abc123");
    }

    #[test]
    fn test_debug_hides_token() {
        let token = BearerToken::new("super-secret-token");
        let printed = format!("{token:?}");
        assert!(!printed.contains("super-secret-token"));
        assert!(printed.starts_with("BearerToken("));
    }

    #[test]
    fn test_deserialize_from_plain_string() {
        let token: BearerToken = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(token, BearerToken::from("abc123"));
    }

    #[test]
    fn test_deserialize_rejects_blank_token() {
        assert!(serde_json::from_str::<BearerToken>("\"\"").is_err());
        assert!(serde_json::from_str::<BearerToken>("\"  \"").is_err());
    }

    #[test]
    fn test_blank_detection() {
        assert!(BearerToken::new("").is_blank());
        assert!(BearerToken::new(" \t").is_blank());
        assert!(!BearerToken::new("abc123").is_blank());
    }
}
