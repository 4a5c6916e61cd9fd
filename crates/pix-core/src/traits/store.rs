//! Durable token storage trait.

use crate::{Result, SessionToken};

/// Durable key-value slot holding the session token.
///
/// Reads and writes are synchronous; callers own the store exclusively
/// through [`SessionContext`](crate::SessionContext).
pub trait TokenStore {
    /// Read the stored token, if any.
    fn load(&self) -> Result<Option<SessionToken>>;

    /// Persist a token, replacing any previous one.
    fn save(&mut self, token: &SessionToken) -> Result<()>;

    /// Remove the stored token. Clearing an empty store is not an error.
    fn clear(&mut self) -> Result<()>;
}

/// In-memory token store.
///
/// Lives only as long as the process; useful for tests and for front ends
/// that do not want a persistent session.
#[derive(Debug, Default, Clone)]
pub struct MemoryTokenStore {
    token: Option<SessionToken>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token.
    pub fn with_token(token: SessionToken) -> Self {
        Self { token: Some(token) }
    }

    /// Returns the token currently held.
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<SessionToken>> {
        Ok(self.token.clone())
    }

    fn save(&mut self, token: &SessionToken) -> Result<()> {
        self.token = Some(token.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.token = None;
        Ok(())
    }
}
