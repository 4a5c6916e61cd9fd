//! Login and registration credentials.

use std::fmt;

use crate::Result;
use crate::error::InvalidInputError;

/// Email and password submitted by the login and register screens.
///
/// Construction applies the same checks a browser form would: the email must
/// look like `local@domain` and the password must not be empty. Anything
/// stricter (minimum password length, uniqueness) is left to the backend.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use pix_core::Credentials;
///
/// let creds = Credentials::new("alice@example.com", "hunter22").unwrap();
/// assert_eq!(creds.email(), "alice@example.com");
/// assert!(Credentials::new("alice", "hunter22").is_err());
/// ```
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Create new credentials, validating both fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is malformed or the password is empty.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let email = email.into().trim().to_string();
        let password = password.into();

        validate_email(&email)?;
        if password.is_empty() {
            return Err(InvalidInputError::EmptyPassword.into());
        }

        Ok(Self { email, password })
    }

    /// Returns the email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing request bodies.
    pub fn password(&self) -> &str {
        &self.password
    }
}

fn validate_email(email: &str) -> Result<()> {
    let invalid = |reason: &str| InvalidInputError::Email {
        value: email.to_string(),
        reason: reason.to_string(),
    };

    if email.is_empty() {
        return Err(invalid("must not be empty").into());
    }
    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace").into());
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            if domain.contains('@') {
                Err(invalid("must contain a single '@'").into())
            } else {
                Ok(())
            }
        }
        _ => Err(invalid("must have the form local@domain").into()),
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hide_password_in_debug() {
        let creds = Credentials::new("alice@example.com", "secret123").unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("alice@example.com"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn trims_email() {
        let creds = Credentials::new("  bob@example.com ", "pw").unwrap();
        assert_eq!(creds.email(), "bob@example.com");
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(Credentials::new("", "pw").is_err());
        assert!(Credentials::new("bob@example.com", "").is_err());
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["bob", "@example.com", "bob@", "bob@@example.com", "b ob@example.com"] {
            assert!(Credentials::new(email, "pw").is_err(), "{email} should be rejected");
        }
    }
}
