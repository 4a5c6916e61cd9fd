//! Backend endpoint paths and wire types.

use serde::{Deserialize, Serialize};

/// Health check.
pub const ROOT: &str = "/";

/// Account creation.
pub const REGISTER: &str = "/register";

/// Token exchange.
pub const LOGIN: &str = "/login";

/// Protected PIX details.
pub const PIX: &str = "/pix";

/// Request body shared by register and login.
#[derive(Debug, Serialize)]
pub struct CredentialsRequest<'a> {
    pub email: &'a str,
    pub password: Secret<'a>,
}

/// A string serialized as-is but hidden from Debug output.
#[derive(Serialize)]
#[serde(transparent)]
pub struct Secret<'a>(pub &'a str);

impl std::fmt::Debug for Secret<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Response from `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Response from `POST /register` and `GET /`.
#[derive(Debug, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned with non-2xx statuses.
///
/// `detail` is usually a string, but request validation failures carry a list
/// of objects with a `msg` field.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Flatten `detail` into a single displayable message.
    pub fn into_detail(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
            serde_json::Value::Array(items) => {
                let msgs: Vec<String> = items
                    .iter()
                    .filter_map(|item| match item {
                        serde_json::Value::String(s) => Some(s.clone()),
                        other => other.get("msg")?.as_str().map(str::to_string),
                    })
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}
