//! Login screen.

use tracing::{debug, instrument};

use crate::messages;
use crate::router::Route;
use crate::session::SessionContext;
use crate::traits::{PixApi, TokenStore};
use crate::{Credentials, Result};

use super::{Transition, connection_failure};

/// State of the login form.
#[derive(Debug, Default, Clone)]
pub struct LoginScreen {
    error: Option<String>,
}

impl LoginScreen {
    /// A fresh login screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// A login screen reached by redirect, showing why the user landed here.
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    /// The error shown under the form, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the form: one login request, no retry.
    ///
    /// On success the token is stored through `session` and the screen
    /// moves to the PIX route.
    #[instrument(skip_all, fields(email = %credentials.email()))]
    pub async fn submit<A, S>(
        &mut self,
        api: &A,
        session: &mut SessionContext<S>,
        credentials: &Credentials,
    ) -> Result<Transition>
    where
        A: PixApi + ?Sized,
        S: TokenStore,
    {
        self.error = None;

        match api.login(credentials).await {
            Ok(token) => {
                session.sign_in(token)?;
                debug!("Login accepted");
                Ok(Transition::to(Route::Pix))
            }
            Err(err) => {
                self.error = Some(connection_failure(err, messages::LOGIN_FAILED)?);
                Ok(Transition::Stay)
            }
        }
    }
}
