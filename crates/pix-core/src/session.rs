//! Session state and the context object that owns it.

use tracing::{debug, info};

use crate::traits::TokenStore;
use crate::{Result, SessionToken};

/// Whether the client currently holds a token.
///
/// Holding a token says nothing about whether the backend still accepts it;
/// that is only learnt from the first protected request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated { token: SessionToken },
}

impl SessionState {
    /// Returns the token, if authenticated.
    pub fn token(&self) -> Option<&SessionToken> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Authenticated { token } => Some(token),
        }
    }

    /// Returns true if a token is held.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }
}

/// Owns the token store and the in-memory view of the session.
///
/// Every token mutation goes through here so the store and [`SessionState`]
/// never disagree: `Anonymous → sign_in → Authenticated → sign_out → Anonymous`.
#[derive(Debug)]
pub struct SessionContext<S> {
    store: S,
    state: SessionState,
}

impl<S: TokenStore> SessionContext<S> {
    /// Open a session context, restoring any token already in the store.
    pub fn open(store: S) -> Result<Self> {
        let state = match store.load()? {
            Some(token) => {
                debug!("Restored session token from store");
                SessionState::Authenticated { token }
            }
            None => SessionState::Anonymous,
        };
        Ok(Self { store, state })
    }

    /// Returns the current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the current token, if any.
    pub fn token(&self) -> Option<&SessionToken> {
        self.state.token()
    }

    /// Persist a freshly issued token and become authenticated.
    pub fn sign_in(&mut self, token: SessionToken) -> Result<()> {
        self.store.save(&token)?;
        self.state = SessionState::Authenticated { token };
        info!("Session started");
        Ok(())
    }

    /// Forget the token, both in memory and in the store.
    ///
    /// The in-memory state is cleared even if the store fails.
    pub fn sign_out(&mut self) -> Result<()> {
        let was_authenticated = self.state.is_authenticated();
        self.state = SessionState::Anonymous;
        self.store.clear()?;
        if was_authenticated {
            info!("Session cleared");
        }
        Ok(())
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the context, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }
}
