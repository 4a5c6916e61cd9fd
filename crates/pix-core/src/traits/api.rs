//! Backend API trait.

use async_trait::async_trait;

use crate::types::ApiUrl;
use crate::{Credentials, PixInfo, Result, SessionToken};

/// Output from account registration.
#[derive(Debug, Clone, Default)]
pub struct RegisterOutput {
    /// Confirmation message from the backend, if it sent one.
    pub message: Option<String>,
}

/// The backend consumed by the screens.
///
/// Implementations make exactly one request per call and never retry.
/// A non-2xx answer must surface as [`Error::Rejected`](crate::Error::Rejected)
/// and anything that prevents reading an answer as
/// [`Error::Transport`](crate::Error::Transport).
#[async_trait]
pub trait PixApi: Send + Sync {
    /// Returns the base URL of this backend.
    fn url(&self) -> &ApiUrl;

    /// Check that the backend is reachable. Returns its status message.
    async fn health(&self) -> Result<String>;

    /// Create a new account.
    async fn register(&self, credentials: &Credentials) -> Result<RegisterOutput>;

    /// Exchange credentials for a session token.
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken>;

    /// Fetch the PIX confirmation details for the session.
    async fn fetch_pix(&self, token: &SessionToken) -> Result<PixInfo>;
}
