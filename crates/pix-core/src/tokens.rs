//! Session token type.

use std::fmt;

use crate::Result;
use crate::error::InvalidInputError;

/// The bearer token issued by `POST /login`.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a token string.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or cannot be sent in an HTTP header.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(InvalidInputError::Token {
                reason: "token is empty".to_string(),
            }
            .into());
        }
        if token.chars().any(|c| c.is_control()) {
            return Err(InvalidInputError::Token {
                reason: "token contains control characters".to_string(),
            }
            .into());
        }
        Ok(Self(token))
    }

    /// Returns the token value.
    ///
    /// # Security
    ///
    /// Use only when constructing authorization headers or persisting the session.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `Authorization` header value for this token.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Hide token value in Debug output
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_hides_value_in_debug() {
        let token = SessionToken::new("alice@example.com").unwrap();
        let debug = format!("{:?}", token);
        assert!(!debug.contains("alice"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn rejects_blank_token() {
        assert!(SessionToken::new("").is_err());
        assert!(SessionToken::new("   ").is_err());
        assert!(SessionToken::new("abc\n").is_err());
    }

    #[test]
    fn bearer_header() {
        let token = SessionToken::new("t").unwrap();
        assert_eq!(token.bearer(), "Bearer t");
    }
}
