//! Error types for the pixflow client.
//!
//! Backend failures come in two classes: the backend answered with a non-2xx
//! status ([`RejectedError`]) or no usable answer arrived at all
//! ([`TransportError`]). Screens render both; the remaining variants are local
//! failures that callers must handle.

use std::fmt;
use thiserror::Error;

/// The unified error type for pixflow operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, undecodable body).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The backend answered with a non-2xx status.
    #[error("request rejected: {0}")]
    Rejected(#[from] RejectedError),

    /// Input validation errors (URL, credentials, token).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The token store could not be read or written.
    #[error("session storage error: {message}")]
    Storage { message: String },
}

impl Error {
    /// Build a storage error from anything displayable.
    pub fn storage(message: impl fmt::Display) -> Self {
        Error::Storage {
            message: message.to_string(),
        }
    }

    /// Returns the backend-supplied detail, if this is a rejection that carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Rejected(rejected) => rejected.detail.as_deref(),
            _ => None,
        }
    }

    /// Returns true if the backend rejected the request.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Error::Rejected(_))
    }

    /// Returns true if no usable response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// The response body could not be decoded.
    #[error("could not decode response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-2xx answer from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedError {
    /// HTTP status code.
    pub status: u16,
    /// The `detail` field of the error body, if present.
    pub detail: Option<String>,
}

impl RejectedError {
    /// Create a new rejection.
    pub fn new(status: u16, detail: Option<String>) -> Self {
        Self { status, detail }
    }

    /// Check if the backend refused the credential or token.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

impl fmt::Display for RejectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for RejectedError {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid email address.
    #[error("invalid email '{value}': {reason}")]
    Email { value: String, reason: String },

    /// Missing password.
    #[error("password must not be empty")]
    EmptyPassword,

    /// Empty or unusable session token.
    #[error("invalid session token: {reason}")]
    Token { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display_includes_detail() {
        let err = Error::from(RejectedError::new(400, Some("E-mail já cadastrado.".into())));
        assert_eq!(
            err.to_string(),
            "request rejected: HTTP 400: E-mail já cadastrado."
        );
        assert_eq!(err.detail(), Some("E-mail já cadastrado."));
        assert!(err.is_rejected());
    }

    #[test]
    fn transport_has_no_detail() {
        let err = Error::from(TransportError::Timeout);
        assert!(err.is_transport());
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn auth_statuses() {
        assert!(RejectedError::new(401, None).is_auth_error());
        assert!(RejectedError::new(403, None).is_auth_error());
        assert!(!RejectedError::new(400, None).is_auth_error());
    }
}
