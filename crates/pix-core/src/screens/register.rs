//! Register screen.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::messages;
use crate::router::Route;
use crate::traits::PixApi;
use crate::{Credentials, Result};

use super::{Transition, connection_failure};

/// How long the success message stays up before going to login.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// State of the registration form.
#[derive(Debug, Default, Clone)]
pub struct RegisterScreen {
    message: Option<String>,
    error: Option<String>,
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// The success message, if the last submit succeeded.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The error message, if the last submit failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the form: one registration request, no retry.
    #[instrument(skip_all, fields(email = %credentials.email()))]
    pub async fn submit<A>(&mut self, api: &A, credentials: &Credentials) -> Result<Transition>
    where
        A: PixApi + ?Sized,
    {
        self.message = None;
        self.error = None;

        match api.register(credentials).await {
            Ok(output) => {
                debug!(server_message = ?output.message, "Registration accepted");
                self.message = Some(messages::REGISTER_SUCCESS.to_string());
                Ok(Transition::NavigateAfter {
                    to: Route::Login,
                    delay: REDIRECT_DELAY,
                })
            }
            Err(err) => {
                self.error = Some(connection_failure(err, messages::REGISTER_FAILED)?);
                Ok(Transition::Stay)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testing::{FakeApi, Reply};

    fn creds() -> Credentials {
        Credentials::new("alice@example.com", "secret123").unwrap()
    }

    #[tokio::test]
    async fn success_shows_message_and_redirects_later() {
        let mut screen = RegisterScreen::new();

        let transition = screen.submit(&FakeApi::new(), &creds()).await.unwrap();

        assert_eq!(
            transition,
            Transition::NavigateAfter {
                to: Route::Login,
                delay: Duration::from_millis(2000)
            }
        );
        assert_eq!(screen.message(), Some(messages::REGISTER_SUCCESS));
        assert!(screen.error().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_shows_detail() {
        let api = FakeApi::new().register(Reply::Reject(400, Some("E-mail já cadastrado.")));
        let mut screen = RegisterScreen::new();

        let transition = screen.submit(&api, &creds()).await.unwrap();

        assert_eq!(transition, Transition::Stay);
        assert_eq!(screen.error(), Some("E-mail já cadastrado."));
        assert!(screen.message().is_none());
    }

    #[tokio::test]
    async fn failures_use_fallbacks() {
        let mut screen = RegisterScreen::new();

        let api = FakeApi::new().register(Reply::Reject(422, None));
        screen.submit(&api, &creds()).await.unwrap();
        assert_eq!(screen.error(), Some(messages::REGISTER_FAILED));

        let api = FakeApi::new().register(Reply::Transport);
        screen.submit(&api, &creds()).await.unwrap();
        assert_eq!(screen.error(), Some(messages::CONNECTION_ERROR));
    }
}
